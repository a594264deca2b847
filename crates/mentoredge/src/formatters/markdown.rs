//! Markdown output formatting.

use crate::models::{ScoredPaper, UserProfile};

/// Authors listed before collapsing the rest into "+ N more".
const MAX_LISTED_AUTHORS: usize = 3;

/// Abstract characters shown before truncation.
const ABSTRACT_PREVIEW_CHARS: usize = 300;

/// Format a ranked recommendation list as Markdown.
#[must_use]
pub fn format_recommendations_markdown(papers: &[ScoredPaper]) -> String {
    if papers.is_empty() {
        return "No recommendations found. Please check your keywords.".to_string();
    }

    let mut output = format!("# Top {} Recommendations\n\n", papers.len());

    for (i, scored) in papers.iter().enumerate() {
        output.push_str(&format_recommendation_markdown(scored, i + 1));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a single recommendation as Markdown.
#[must_use]
pub fn format_recommendation_markdown(scored: &ScoredPaper, index: usize) -> String {
    let paper = &scored.paper;
    let mut output = String::new();

    // Title
    output.push_str(&format!("## {}. {}\n\n", index, paper.title_or_default()));

    // Authors
    if !paper.authors.is_empty() {
        let listed = paper.authors.iter().take(MAX_LISTED_AUTHORS).cloned().collect::<Vec<_>>();
        let mut line = format!("**Authors**: {}", listed.join(", "));
        if paper.authors.len() > MAX_LISTED_AUTHORS {
            line.push_str(&format!(" + {} more", paper.authors.len() - MAX_LISTED_AUTHORS));
        }
        output.push_str(&format!("{line}\n\n"));
    }

    // Year, citations and score
    let year = paper.year.map_or_else(|| "N/A".to_string(), |y| y.to_string());
    output.push_str(&format!(
        "**Year**: {year} | **Citations**: {} | **Score**: {:.4}\n\n",
        paper.citations(),
        scored.score
    ));

    if !scored.matched_keywords.is_empty() {
        output.push_str(&format!(
            "**Matched Keywords**: {}\n\n",
            scored.matched_keywords.join(", ")
        ));
    }

    if let Some(url) = &paper.url {
        output.push_str(&format!("**URL**: {url}\n\n"));
    }

    output.push_str(&format!(
        "**Score Breakdown**: Relevance={:.3}, Citations={:.3}, Recency={:.3}\n",
        scored.relevance_norm, scored.citations_norm, scored.recency_norm
    ));

    // Abstract (truncated)
    if let Some(abs) = &paper.r#abstract {
        let mut preview: String = abs.chars().take(ABSTRACT_PREVIEW_CHARS).collect();
        if abs.chars().count() > ABSTRACT_PREVIEW_CHARS {
            preview.push_str("...");
        }
        output.push_str(&format!("\n**Abstract**: {preview}\n"));
    }

    output
}

/// Format a profile summary as Markdown.
#[must_use]
pub fn format_profile_markdown(profile: &UserProfile) -> String {
    let weights = profile.weights();
    let mut output = String::from("# User Profile\n\n");

    if !profile.name().is_empty() {
        output.push_str(&format!("**Name**: {}\n\n", profile.name()));
    }
    if !profile.research_interests().is_empty() {
        output.push_str(&format!(
            "**Research Interests**: {}\n\n",
            profile.research_interests().join(", ")
        ));
    }
    output.push_str(&format!(
        "**Primary Keywords**: {}\n\n",
        profile.primary_keywords().join(", ")
    ));
    if let Some(min_year) = profile.min_year() {
        output.push_str(&format!("**Minimum Year**: {min_year}\n\n"));
    }
    output.push_str(&format!(
        "**Weights**: Relevance={:.2}, Citations={:.2}, Recency={:.2}\n",
        weights.relevance, weights.citations, weights.recency
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Paper, ScoringWeights};

    fn scored(authors: &[&str]) -> ScoredPaper {
        ScoredPaper {
            paper: Paper {
                paper_id: "p1".into(),
                title: "Attention Is All You Need".into(),
                authors: authors.iter().map(|a| (*a).to_string()).collect(),
                year: Some(2017),
                citation_count: Some(90_000),
                url: Some("https://www.semanticscholar.org/paper/p1".into()),
                ..Default::default()
            },
            score: 0.9,
            relevance_norm: 1.0,
            citations_norm: 1.0,
            recency_norm: 0.5,
            matched_keywords: vec!["transformer architecture".into()],
        }
    }

    #[test]
    fn test_recommendation_markdown_lines() {
        let output = format_recommendation_markdown(&scored(&["A", "B"]), 1);
        assert!(output.contains("## 1. Attention Is All You Need"));
        assert!(output.contains("**Authors**: A, B\n"));
        assert!(output.contains("**Year**: 2017 | **Citations**: 90000 | **Score**: 0.9000"));
        assert!(output.contains("**Matched Keywords**: transformer architecture"));
        assert!(output.contains("Relevance=1.000, Citations=1.000, Recency=0.500"));
    }

    #[test]
    fn test_long_author_list_collapsed() {
        let output = format_recommendation_markdown(&scored(&["A", "B", "C", "D", "E"]), 2);
        assert!(output.contains("**Authors**: A, B, C + 2 more"));
    }

    #[test]
    fn test_empty_list_message() {
        assert!(format_recommendations_markdown(&[]).contains("No recommendations"));
    }

    #[test]
    fn test_abstract_truncation_respects_char_boundaries() {
        let mut paper = scored(&[]);
        paper.paper.r#abstract = Some("é".repeat(400));
        let output = format_recommendation_markdown(&paper, 1);
        assert!(output.contains("..."));
    }

    #[test]
    fn test_profile_markdown() {
        let profile = UserProfile::new(
            "Dr. Jane Researcher",
            vec!["graph neural networks".into()],
            ScoringWeights::default(),
        )
        .unwrap()
        .with_min_year(Some(2020));

        let output = format_profile_markdown(&profile);
        assert!(output.contains("**Name**: Dr. Jane Researcher"));
        assert!(output.contains("**Minimum Year**: 2020"));
        assert!(output.contains("Relevance=0.50, Citations=0.30, Recency=0.20"));
    }
}

//! JSON output formatting.

use serde_json::{Value, json};

use crate::error::ExportError;
use crate::models::ScoredPaper;

/// Create a compact recommendation representation for JSON output.
///
/// Scores keep full precision; optional paper fields appear only when present.
#[must_use]
pub fn compact_scored_paper(scored: &ScoredPaper) -> Value {
    let paper = &scored.paper;
    let mut obj = json!({
        "paperId": paper.paper_id,
        "title": paper.title_or_default(),
        "year": paper.year,
        "citationCount": paper.citation_count,
        "score": scored.score,
        "relevanceNorm": scored.relevance_norm,
        "citationsNorm": scored.citations_norm,
        "recencyNorm": scored.recency_norm,
        "matchedKeywords": scored.matched_keywords,
    });

    if !paper.authors.is_empty() {
        obj["authors"] = json!(paper.authors);
    }

    if let Some(url) = &paper.url {
        obj["url"] = json!(url);
    }

    if let Some(abs) = &paper.r#abstract {
        obj["abstract"] = json!(abs);
    }

    obj
}

/// Render a recommendation list as a pretty-printed JSON array.
pub fn format_recommendations_json(papers: &[ScoredPaper]) -> Result<String, ExportError> {
    let compact = papers.iter().map(compact_scored_paper).collect::<Vec<_>>();
    Ok(serde_json::to_string_pretty(&compact)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Paper;

    #[test]
    fn test_compact_scored_paper() {
        let scored = ScoredPaper {
            paper: Paper {
                paper_id: "abc123".to_string(),
                title: "Test Paper".to_string(),
                year: Some(2024),
                citation_count: None,
                authors: vec!["John Doe".to_string()],
                ..Default::default()
            },
            score: 0.75,
            relevance_norm: 1.0,
            citations_norm: 0.0,
            recency_norm: 1.0,
            matched_keywords: vec!["gnn".to_string()],
        };

        let compact = compact_scored_paper(&scored);

        assert_eq!(compact["paperId"], "abc123");
        assert_eq!(compact["year"], 2024);
        assert_eq!(compact["citationCount"], Value::Null);
        assert_eq!(compact["score"], 0.75);
        assert_eq!(compact["authors"], json!(["John Doe"]));
        assert_eq!(compact["matchedKeywords"], json!(["gnn"]));
        assert!(compact.get("url").is_none());
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_recommendations_json(&[]).unwrap(), "[]");
    }
}

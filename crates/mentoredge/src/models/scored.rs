//! Scored recommendation output and its flat export record.

use serde::{Deserialize, Serialize};

use super::Paper;

/// A paper with its combined score and the sub-scores that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPaper {
    /// The recommended paper.
    pub paper: Paper,

    /// Weighted combination of the three sub-scores.
    pub score: f64,

    /// Best rank-derived relevance across matching keywords, in (0, 1].
    pub relevance_norm: f64,

    /// Log-scaled citation score, in [0, 1].
    pub citations_norm: f64,

    /// Publication recency score, 0.0 or within [0.1, 1].
    pub recency_norm: f64,

    /// Keywords whose search surfaced this paper, in query order.
    pub matched_keywords: Vec<String>,
}

impl ScoredPaper {
    /// Flatten into the tabular export record.
    #[must_use]
    pub fn to_record(&self) -> RecommendationRecord {
        let paper = &self.paper;
        RecommendationRecord {
            paper_id: paper.paper_id.clone(),
            title: paper.title.clone(),
            authors: paper.author_names("; "),
            year: paper.year,
            r#abstract: paper.r#abstract.clone().unwrap_or_default(),
            citation_count: paper.citations(),
            url: paper.url.clone().unwrap_or_default(),
            score: format!("{:.4}", self.score),
            relevance_norm: format!("{:.4}", self.relevance_norm),
            citations_norm: format!("{:.4}", self.citations_norm),
            recency_norm: format!("{:.4}", self.recency_norm),
            matched_keywords: self.matched_keywords.join(", "),
        }
    }
}

/// One exported row. Field names and order are fixed for downstream consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRecord {
    pub paper_id: String,
    pub title: String,
    /// Author names joined with `"; "`.
    pub authors: String,
    pub year: Option<i32>,
    pub r#abstract: String,
    /// Citation count, 0 when unknown.
    pub citation_count: i32,
    pub url: String,
    /// Scores are rendered with four decimals.
    pub score: String,
    pub relevance_norm: String,
    pub citations_norm: String,
    pub recency_norm: String,
    /// Keywords joined with `", "`.
    pub matched_keywords: String,
}

impl RecommendationRecord {
    /// Column names in export order.
    pub const FIELDS: [&'static str; 12] = [
        "paperId",
        "title",
        "authors",
        "year",
        "abstract",
        "citationCount",
        "url",
        "score",
        "relevanceNorm",
        "citationsNorm",
        "recencyNorm",
        "matchedKeywords",
    ];
}

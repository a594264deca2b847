//! Paper data model and the Semantic Scholar search wire format.

use serde::{Deserialize, Serialize};

/// A research paper as seen by the recommendation engine.
///
/// Built once from a search result item and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Semantic Scholar paper ID. Empty when the source record carried none.
    pub paper_id: String,

    /// Paper title (empty when unknown).
    #[serde(default)]
    pub title: String,

    /// Author display names in byline order.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Number of citations; `None` when the source did not report it.
    #[serde(default)]
    pub citation_count: Option<i32>,

    /// Canonical Semantic Scholar URL.
    #[serde(default)]
    pub url: Option<String>,
}

impl Paper {
    /// Get the paper title, falling back to "Untitled" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        if self.title.is_empty() { "Untitled" } else { &self.title }
    }

    /// Check if the paper can be deduplicated and attributed to keywords.
    #[must_use]
    pub fn has_id(&self) -> bool {
        !self.paper_id.is_empty()
    }

    /// Get citation count or 0 if not available.
    #[must_use]
    pub fn citations(&self) -> i32 {
        self.citation_count.unwrap_or(0)
    }

    /// Get author names joined with `separator`.
    #[must_use]
    pub fn author_names(&self, separator: &str) -> String {
        self.authors.join(separator)
    }
}

/// One entry of the `authors` array.
///
/// The API returns `{"authorId": .., "name": ..}` objects, but bare strings
/// show up in cached and third-party payloads.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AuthorEntry {
    /// Bare display name.
    Plain(String),
    /// Author object; only the name is kept.
    Named {
        /// Display name.
        #[serde(default)]
        name: Option<String>,
    },
}

impl AuthorEntry {
    /// Map any author representation to a display name.
    #[must_use]
    pub fn into_display_name(self) -> String {
        match self {
            Self::Plain(name) => name,
            Self::Named { name } => name.unwrap_or_default(),
        }
    }
}

/// A single search result item as returned on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPaper {
    #[serde(default)]
    paper_id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    authors: Option<Vec<AuthorEntry>>,
    #[serde(default)]
    year: Option<i32>,
    #[serde(default)]
    r#abstract: Option<String>,
    #[serde(default)]
    citation_count: Option<i32>,
    #[serde(default)]
    url: Option<String>,
}

impl From<RawPaper> for Paper {
    fn from(raw: RawPaper) -> Self {
        Self {
            paper_id: raw.paper_id.unwrap_or_default(),
            title: raw.title.unwrap_or_default(),
            authors: raw
                .authors
                .unwrap_or_default()
                .into_iter()
                .map(AuthorEntry::into_display_name)
                .collect(),
            year: raw.year,
            r#abstract: raw.r#abstract,
            citation_count: raw.citation_count,
            url: raw.url,
        }
    }
}

impl Paper {
    /// Parse one search result item, normalizing its authors.
    pub fn from_item(item: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value::<RawPaper>(item).map(Self::from)
    }
}

/// Search response wrapper.
///
/// Items stay untyped so that one malformed record does not fail the batch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Total number of matching papers.
    #[serde(default)]
    pub total: i64,

    /// Current offset in the result set.
    #[serde(default)]
    pub offset: i32,

    /// Offset of the next page, if any.
    #[serde(default)]
    pub next: Option<i32>,

    /// Result items, best match first.
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}

impl SearchResponse {
    /// Parse every item, skipping the ones that are malformed.
    ///
    /// Returns the parsed papers in response order and the number of skipped items.
    #[must_use]
    pub fn into_papers(self) -> (Vec<Paper>, usize) {
        let mut papers = Vec::with_capacity(self.data.len());
        let mut skipped = 0;

        for (index, item) in self.data.into_iter().enumerate() {
            match Paper::from_item(item) {
                Ok(paper) => papers.push(paper),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping malformed search result item");
                    skipped += 1;
                }
            }
        }

        (papers, skipped)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_paper_from_item_minimal() {
        let paper = Paper::from_item(json!({"paperId": "abc123"})).unwrap();
        assert_eq!(paper.paper_id, "abc123");
        assert!(paper.title.is_empty());
        assert_eq!(paper.title_or_default(), "Untitled");
        assert!(paper.authors.is_empty());
        assert_eq!(paper.citation_count, None);
    }

    #[test]
    fn test_paper_from_item_full() {
        let paper = Paper::from_item(json!({
            "paperId": "abc123",
            "title": "Test Paper",
            "abstract": "This is a test.",
            "year": 2024,
            "citationCount": 42,
            "url": "https://www.semanticscholar.org/paper/abc123",
            "authors": [{"authorId": "auth1", "name": "John Doe"}]
        }))
        .unwrap();

        assert_eq!(paper.title_or_default(), "Test Paper");
        assert_eq!(paper.year, Some(2024));
        assert_eq!(paper.citations(), 42);
        assert_eq!(paper.authors, vec!["John Doe".to_string()]);
        assert_eq!(paper.url.as_deref(), Some("https://www.semanticscholar.org/paper/abc123"));
    }

    #[test]
    fn test_mixed_author_representations() {
        let paper = Paper::from_item(json!({
            "paperId": "p1",
            "authors": ["Ada Lovelace", {"authorId": "2", "name": "Alan Turing"}, {"authorId": "3"}]
        }))
        .unwrap();

        assert_eq!(paper.authors, vec!["Ada Lovelace", "Alan Turing", ""]);
        assert_eq!(paper.author_names("; "), "Ada Lovelace; Alan Turing; ");
    }

    #[test]
    fn test_null_authors_and_missing_id() {
        let paper = Paper::from_item(json!({"title": "Orphan", "authors": null})).unwrap();
        assert!(!paper.has_id());
        assert!(paper.authors.is_empty());
    }

    #[test]
    fn test_explicit_zero_citations_differs_from_absent() {
        let zero = Paper::from_item(json!({"paperId": "a", "citationCount": 0})).unwrap();
        let absent = Paper::from_item(json!({"paperId": "b"})).unwrap();
        assert_eq!(zero.citation_count, Some(0));
        assert_eq!(absent.citation_count, None);
        assert_eq!(zero.citations(), absent.citations());
    }

    #[test]
    fn test_search_response_skips_malformed_items() {
        let response: SearchResponse = serde_json::from_value(json!({
            "total": 3,
            "offset": 0,
            "data": [
                {"paperId": "good1", "year": 2021},
                {"paperId": "bad", "year": "not a year"},
                "not an object",
                {"paperId": "good2", "citationCount": 5}
            ]
        }))
        .unwrap();

        let (papers, skipped) = response.into_papers();
        assert_eq!(skipped, 2);
        let ids: Vec<_> = papers.iter().map(|p| p.paper_id.as_str()).collect();
        assert_eq!(ids, vec!["good1", "good2"]);
    }
}

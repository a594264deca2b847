//! Keyword provenance and cross-keyword deduplication.

use std::collections::{HashMap, HashSet};

use super::scoring::normalize_relevance;
use crate::models::Paper;

/// One keyword query that surfaced a paper, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    /// The keyword query.
    pub keyword: String,
    /// 0-indexed rank in that query's results.
    pub position: usize,
    /// Number of results that query returned.
    pub total: usize,
}

impl KeywordMatch {
    /// Rank-derived relevance of this match.
    #[must_use]
    pub fn relevance(&self) -> f64 {
        normalize_relevance(self.position, self.total)
    }
}

/// Paper ID to keyword matches, built fresh for one recommendation run.
#[derive(Debug, Default)]
pub struct KeywordMatches {
    by_paper: HashMap<String, Vec<KeywordMatch>>,
}

impl KeywordMatches {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the ranked results of one keyword query.
    ///
    /// Papers without an ID cannot be attributed and are not recorded.
    pub fn record(&mut self, keyword: &str, papers: &[Paper]) {
        let total = papers.len();
        for (position, paper) in papers.iter().enumerate().filter(|(_, p)| p.has_id()) {
            self.by_paper.entry(paper.paper_id.clone()).or_default().push(KeywordMatch {
                keyword: keyword.to_string(),
                position,
                total,
            });
        }
    }

    /// All matches of a paper, in recording order.
    #[must_use]
    pub fn matches(&self, paper_id: &str) -> &[KeywordMatch] {
        self.by_paper.get(paper_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Best relevance across a paper's matches; 0.0 when it has none.
    #[must_use]
    pub fn best_relevance(&self, paper_id: &str) -> f64 {
        self.matches(paper_id).iter().map(KeywordMatch::relevance).fold(0.0, f64::max)
    }

    /// Keywords that surfaced a paper, in order of first appearance.
    #[must_use]
    pub fn keywords(&self, paper_id: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.matches(paper_id)
            .iter()
            .filter(|m| seen.insert(m.keyword.as_str()))
            .map(|m| m.keyword.clone())
            .collect()
    }

    /// Number of distinct papers with at least one match.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_paper.len()
    }

    /// Whether no paper has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_paper.is_empty()
    }
}

/// Keep the first occurrence of each paper ID, preserving first-seen order.
///
/// Papers without an ID are dropped.
#[must_use]
pub fn deduplicate(papers: Vec<Paper>) -> Vec<Paper> {
    let mut seen = HashSet::new();
    papers
        .into_iter()
        .filter(|paper| paper.has_id() && seen.insert(paper.paper_id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(id: &str) -> Paper {
        Paper { paper_id: id.to_string(), ..Default::default() }
    }

    #[test]
    fn test_deduplicate_keeps_first_occurrence() {
        let mut first = paper("a");
        first.title = "first".into();
        let mut second = paper("a");
        second.title = "second".into();

        let unique = deduplicate(vec![first, paper("b"), second, paper("c"), paper("b")]);
        let ids: Vec<_> = unique.iter().map(|p| p.paper_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(unique[0].title, "first");
    }

    #[test]
    fn test_deduplicate_drops_missing_ids() {
        let unique = deduplicate(vec![paper(""), paper("a"), paper("")]);
        assert_eq!(unique.len(), 1);
    }

    #[test]
    fn test_best_relevance_takes_max() {
        let mut matches = KeywordMatches::new();
        matches.record("kw1", &[paper("x"), paper("y"), paper("z")]);
        matches.record("kw2", &[paper("z"), paper("x")]);

        assert_eq!(matches.best_relevance("z"), 1.0);
        assert_eq!(matches.keywords("z"), vec!["kw1", "kw2"]);
        assert_eq!(
            matches.matches("z")[0],
            KeywordMatch { keyword: "kw1".into(), position: 2, total: 3 }
        );
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_unmatched_paper_has_zero_relevance() {
        let matches = KeywordMatches::new();
        assert!(matches.is_empty());
        assert_eq!(matches.best_relevance("ghost"), 0.0);
        assert!(matches.keywords("ghost").is_empty());
    }

    #[test]
    fn test_record_skips_papers_without_id_but_counts_them_in_total() {
        let mut matches = KeywordMatches::new();
        matches.record("kw", &[paper(""), paper("a")]);
        assert_eq!(
            matches.matches("a"),
            [KeywordMatch { keyword: "kw".into(), position: 1, total: 2 }]
        );
        assert!(matches.matches("").is_empty());
    }
}

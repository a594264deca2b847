//! Personalized recommendation engine.
//!
//! A run issues one search per profile keyword, merges and deduplicates the
//! results, scores every unique paper on relevance, citations and recency,
//! and returns the best `top_n` by weighted score.

mod aggregate;
mod scoring;

use std::sync::Arc;

use chrono::{Datelike, Utc};
use futures::StreamExt;

pub use aggregate::{KeywordMatch, KeywordMatches, deduplicate};
pub use scoring::{
    MIN_RECENCY_SCORE, RECENCY_EPOCH, RECENCY_WINDOW_YEARS, RELEVANCE_DECAY, normalize_citations,
    normalize_recency, normalize_relevance,
};

use crate::config::defaults;
use crate::error::RecommendError;
use crate::models::{Paper, ScoredPaper, UserProfile};
use crate::source::PaperSource;

/// Builds ranked recommendations from a [`PaperSource`].
///
/// Holds no per-run state, so one instance can serve many profiles.
#[derive(Clone)]
pub struct Recommender {
    source: Arc<dyn PaperSource>,
    current_year: Option<i32>,
    fetch_concurrency: usize,
}

impl Recommender {
    /// Create a recommender over the given source.
    #[must_use]
    pub fn new(source: Arc<dyn PaperSource>) -> Self {
        Self { source, current_year: None, fetch_concurrency: defaults::FETCH_CONCURRENCY }
    }

    /// Pin the year used for recency scoring and the query year range.
    ///
    /// Defaults to the current UTC year at the start of each run.
    #[must_use]
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = Some(year);
        self
    }

    /// Number of keyword queries kept in flight (at least 1).
    ///
    /// Results are consumed in keyword order, so rankings do not depend on it.
    #[must_use]
    pub fn with_fetch_concurrency(mut self, concurrency: usize) -> Self {
        self.fetch_concurrency = concurrency.max(1);
        self
    }

    /// Build personalized recommendations for `profile`.
    ///
    /// Fetches up to `papers_per_keyword` papers per keyword and returns at most
    /// `top_n` scored papers, best first. Keywords whose query fails with a
    /// recoverable error contribute nothing; an empty result is `Ok(vec![])`.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::Source`] when the source fails unrecoverably
    /// (a rejected API key).
    #[tracing::instrument(skip_all, fields(profile = profile.name(), source = self.source.name()))]
    pub async fn build(
        &self,
        profile: &UserProfile,
        papers_per_keyword: usize,
        top_n: usize,
    ) -> Result<Vec<ScoredPaper>, RecommendError> {
        if papers_per_keyword == 0 || top_n == 0 {
            return Ok(Vec::new());
        }

        let current_year = self.current_year.unwrap_or_else(|| Utc::now().year());
        let (min_year, max_year) = match profile.min_year() {
            Some(min) => (Some(min), Some(current_year)),
            None => (None, None),
        };

        tracing::info!(
            keywords = profile.primary_keywords().len(),
            papers_per_keyword,
            top_n,
            "Building recommendations"
        );

        // Step 1-2: fetch per keyword and record provenance
        let mut fetches = std::pin::pin!(
            futures::stream::iter(profile.primary_keywords().to_vec())
                .map(|keyword| {
                    let source = Arc::clone(&self.source);
                    async move {
                        let result =
                            source.search(&keyword, papers_per_keyword, min_year, max_year).await;
                        (keyword, result)
                    }
                })
                .buffered(self.fetch_concurrency)
        );

        let mut all_papers: Vec<Paper> = Vec::new();
        let mut matches = KeywordMatches::new();

        while let Some((keyword, result)) = fetches.next().await {
            match result {
                Ok(papers) => {
                    tracing::info!(keyword = %keyword, found = papers.len(), "Fetched papers");
                    matches.record(&keyword, &papers);
                    all_papers.extend(papers);
                }
                Err(e) if e.is_recoverable() => {
                    tracing::warn!(
                        keyword = %keyword,
                        error = %e,
                        "Skipping keyword after fetch failure"
                    );
                }
                Err(e) => {
                    tracing::error!(keyword = %keyword, error = %e, "Aborting run");
                    return Err(RecommendError::Source { keyword, source: e });
                }
            }
        }

        // Step 3-4: deduplicate
        let fetched = all_papers.len();
        let unique = deduplicate(all_papers);
        tracing::info!(fetched, unique = unique.len(), "Deduplicated papers");

        if unique.is_empty() {
            tracing::info!("No papers found for any keyword");
            return Ok(Vec::new());
        }

        // Step 5-6: score
        let max_citations = unique.iter().map(Paper::citations).max().unwrap_or(0);
        let weights = profile.weights();

        let mut scored: Vec<ScoredPaper> = unique
            .into_iter()
            .map(|paper| {
                let relevance_norm = matches.best_relevance(&paper.paper_id);
                let citations_norm = normalize_citations(paper.citation_count, max_citations);
                let recency_norm = normalize_recency(paper.year, min_year, current_year);

                ScoredPaper {
                    score: weights.combine(relevance_norm, citations_norm, recency_norm),
                    relevance_norm,
                    citations_norm,
                    recency_norm,
                    matched_keywords: matches.keywords(&paper.paper_id),
                    paper,
                }
            })
            .collect();

        // Step 7-8: stable sort, best first, then truncate
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(top_n);

        tracing::info!(
            returned = scored.len(),
            relevance = weights.relevance,
            citations = weights.citations,
            recency = weights.recency,
            "Recommendations ready"
        );

        Ok(scored)
    }
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("source", &self.source.name())
            .field("current_year", &self.current_year)
            .field("fetch_concurrency", &self.fetch_concurrency)
            .finish()
    }
}

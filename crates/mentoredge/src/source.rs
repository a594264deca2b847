//! The paper source seam between the recommendation engine and a search backend.

use crate::client::SemanticScholarClient;
use crate::error::ClientResult;
use crate::models::Paper;

/// A keyword search backend.
///
/// Implementations return papers best match first, normalize author
/// representations before building a [`Paper`], skip malformed items rather
/// than failing the call, and own any throttling state.
#[async_trait::async_trait]
pub trait PaperSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Search for up to `limit` papers matching `query`, optionally restricted
    /// to an inclusive publication year range.
    async fn search(
        &self,
        query: &str,
        limit: usize,
        min_year: Option<i32>,
        max_year: Option<i32>,
    ) -> ClientResult<Vec<Paper>>;
}

#[async_trait::async_trait]
impl PaperSource for SemanticScholarClient {
    fn name(&self) -> &'static str {
        "semantic_scholar"
    }

    async fn search(
        &self,
        query: &str,
        limit: usize,
        min_year: Option<i32>,
        max_year: Option<i32>,
    ) -> ClientResult<Vec<Paper>> {
        self.search_papers(query, limit, min_year, max_year).await
    }
}

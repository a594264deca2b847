//! MentorEdge
//!
//! Personalized academic paper recommendations on top of the Semantic Scholar
//! Graph API. A researcher profile lists search keywords, an optional minimum
//! year and three scoring weights; the engine searches every keyword, merges
//! and deduplicates the results, and ranks each paper by a weighted blend of
//! search relevance, citation impact and recency.
//!
//! # Features
//!
//! - **Explainable scores**: every recommendation carries its three sub-scores
//!   and the keywords that surfaced it
//! - **Rate-limited**: one throttle shared by all clones of the client
//! - **Fault-tolerant**: failed keywords and malformed records are skipped
//! - **Exports**: CSV, JSON and Markdown, plus an MCP stdio tool
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use mentoredge::{Config, Recommender, ScoringWeights, SemanticScholarClient, UserProfile};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SemanticScholarClient::new(Config::from_env()?)?;
//!     let recommender = Recommender::new(Arc::new(client));
//!
//!     let profile = UserProfile::new(
//!         "Dr. Jane Researcher",
//!         vec!["graph neural networks".into(), "language models".into()],
//!         ScoringWeights::default(),
//!     )?
//!     .with_min_year(Some(2020));
//!
//!     for scored in recommender.build(&profile, 50, 20).await? {
//!         println!("{:.4} {}", scored.score, scored.paper.title_or_default());
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod recommender;
pub mod server;
pub mod source;
pub mod tools;

pub use client::SemanticScholarClient;
pub use config::Config;
pub use error::{ClientError, ExportError, ProfileError, RecommendError, ToolError};
pub use models::{Paper, ScoredPaper, ScoringWeights, UserProfile};
pub use recommender::Recommender;
pub use source::PaperSource;

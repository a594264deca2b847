//! Data models: papers, profiles, scored recommendations and tool inputs.
//!
//! Wire-facing models use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` to match API naming.

mod inputs;
mod paper;
mod profile;
mod scored;

pub use inputs::{RecommendInput, ResponseFormat};
pub use paper::{AuthorEntry, Paper, RawPaper, SearchResponse};
pub use profile::{ProfileInput, ScoringWeights, UserProfile, WEIGHT_SUM_TOLERANCE};
pub use scored::{RecommendationRecord, ScoredPaper};

//! User profile and scoring weights.

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Allowed deviation of the weight sum from 1.0 before weights are rescaled.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Relative importance of the three sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight of the rank-derived relevance score.
    pub relevance: f64,
    /// Weight of the log-scaled citation score.
    pub citations: f64,
    /// Weight of the publication recency score.
    pub recency: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self { relevance: 0.5, citations: 0.3, recency: 0.2 }
    }
}

impl ScoringWeights {
    /// Create a weight vector. Validation happens when it joins a profile.
    #[must_use]
    pub const fn new(relevance: f64, citations: f64, recency: f64) -> Self {
        Self { relevance, citations, recency }
    }

    /// Sum of the three weights.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.relevance + self.citations + self.recency
    }

    /// Validate the weights and rescale them to sum to 1.0 when they are off
    /// by more than [`WEIGHT_SUM_TOLERANCE`]. Ratios are preserved.
    pub fn normalized(self) -> Result<Self, ProfileError> {
        let named = [
            ("relevance", self.relevance),
            ("citations", self.citations),
            ("recency", self.recency),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(ProfileError::InvalidWeight { name, value });
            }
        }

        let total = self.sum();
        if total == 0.0 {
            return Err(ProfileError::ZeroWeights);
        }

        if (total - 1.0).abs() <= WEIGHT_SUM_TOLERANCE {
            return Ok(self);
        }

        // Huge finite weights can overflow the sum; rescale by the largest first.
        let scaled = if total.is_finite() {
            self
        } else {
            let largest = self.relevance.max(self.citations).max(self.recency);
            Self::new(self.relevance / largest, self.citations / largest, self.recency / largest)
        };
        let total = scaled.sum();

        Ok(Self {
            relevance: scaled.relevance / total,
            citations: scaled.citations / total,
            recency: scaled.recency / total,
        })
    }

    /// Weighted combination of the three sub-scores.
    #[must_use]
    pub fn combine(&self, relevance: f64, citations: f64, recency: f64) -> f64 {
        self.relevance * relevance + self.citations * citations + self.recency * recency
    }
}

/// Unvalidated profile, as read from JSON or assembled by a CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    /// Display name of the researcher.
    #[serde(default)]
    pub name: String,

    /// Free-text research interests (not used in scoring).
    #[serde(default)]
    pub research_interests: Vec<String>,

    /// Search keywords, one query each.
    #[serde(default)]
    pub primary_keywords: Vec<String>,

    /// Earliest publication year of interest.
    #[serde(default)]
    pub min_year: Option<i32>,

    /// Scoring weights; defaults to relevance 0.5, citations 0.3, recency 0.2.
    #[serde(default)]
    pub scoring_weights: ScoringWeights,
}

/// A validated researcher profile.
///
/// Guarantees at least one non-blank keyword and weights that sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileInput", into = "ProfileInput")]
pub struct UserProfile {
    name: String,
    research_interests: Vec<String>,
    primary_keywords: Vec<String>,
    min_year: Option<i32>,
    weights: ScoringWeights,
}

impl UserProfile {
    /// Create a profile from its required parts.
    pub fn new(
        name: impl Into<String>,
        primary_keywords: Vec<String>,
        weights: ScoringWeights,
    ) -> Result<Self, ProfileError> {
        ProfileInput {
            name: name.into(),
            primary_keywords,
            scoring_weights: weights,
            ..ProfileInput::default()
        }
        .try_into()
    }

    /// Set the descriptive research interests.
    #[must_use]
    pub fn with_research_interests(mut self, interests: Vec<String>) -> Self {
        self.research_interests = interests;
        self
    }

    /// Set the minimum publication year.
    #[must_use]
    pub fn with_min_year(mut self, min_year: Option<i32>) -> Self {
        self.min_year = min_year;
        self
    }

    /// Researcher name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Descriptive research interests.
    #[must_use]
    pub fn research_interests(&self) -> &[String] {
        &self.research_interests
    }

    /// Search keywords in query order.
    #[must_use]
    pub fn primary_keywords(&self) -> &[String] {
        &self.primary_keywords
    }

    /// Minimum publication year filter.
    #[must_use]
    pub const fn min_year(&self) -> Option<i32> {
        self.min_year
    }

    /// Normalized scoring weights.
    #[must_use]
    pub const fn weights(&self) -> &ScoringWeights {
        &self.weights
    }
}

impl TryFrom<ProfileInput> for UserProfile {
    type Error = ProfileError;

    fn try_from(input: ProfileInput) -> Result<Self, Self::Error> {
        if input.primary_keywords.is_empty() {
            return Err(ProfileError::NoKeywords);
        }
        if let Some(index) = input.primary_keywords.iter().position(|k| k.trim().is_empty()) {
            return Err(ProfileError::BlankKeyword { index });
        }

        let weights = input.scoring_weights.normalized()?;

        Ok(Self {
            name: input.name,
            research_interests: input.research_interests,
            primary_keywords: input.primary_keywords,
            min_year: input.min_year,
            weights,
        })
    }
}

impl From<UserProfile> for ProfileInput {
    fn from(profile: UserProfile) -> Self {
        Self {
            name: profile.name,
            research_interests: profile.research_interests,
            primary_keywords: profile.primary_keywords,
            min_year: profile.min_year,
            scoring_weights: profile.weights,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_weights_within_tolerance_kept() {
        let weights = ScoringWeights::new(0.5, 0.3, 0.205).normalized().unwrap();
        assert_eq!(weights, ScoringWeights::new(0.5, 0.3, 0.205));
    }

    #[test]
    fn test_weights_rescaled_preserving_ratio() {
        let weights = ScoringWeights::new(2.0, 1.0, 1.0).normalized().unwrap();
        assert_eq!(weights, ScoringWeights::new(0.5, 0.25, 0.25));
        assert!((weights.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_huge_weights_do_not_overflow() {
        let weights = ScoringWeights::new(f64::MAX, f64::MAX, 0.0).normalized().unwrap();
        assert_eq!(weights, ScoringWeights::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn test_zero_weights_rejected() {
        let err = ScoringWeights::new(0.0, 0.0, 0.0).normalized().unwrap_err();
        assert_eq!(err, ProfileError::ZeroWeights);
    }

    #[test]
    fn test_negative_and_nan_weights_rejected() {
        assert!(matches!(
            ScoringWeights::new(-0.5, 1.0, 0.5).normalized(),
            Err(ProfileError::InvalidWeight { name: "relevance", .. })
        ));
        assert!(matches!(
            ScoringWeights::new(0.5, 0.5, f64::NAN).normalized(),
            Err(ProfileError::InvalidWeight { name: "recency", .. })
        ));
    }

    #[test]
    fn test_profile_requires_keywords() {
        let err = UserProfile::new("Dr. X", vec![], ScoringWeights::default()).unwrap_err();
        assert_eq!(err, ProfileError::NoKeywords);

        let err = UserProfile::new("Dr. X", keywords(&["gnn", "  "]), ScoringWeights::default())
            .unwrap_err();
        assert_eq!(err, ProfileError::BlankKeyword { index: 1 });
    }

    #[test]
    fn test_profile_builder_methods() {
        let profile = UserProfile::new("Dr. X", keywords(&["gnn"]), ScoringWeights::default())
            .unwrap()
            .with_min_year(Some(2020))
            .with_research_interests(keywords(&["Graph Learning"]));

        assert_eq!(profile.name(), "Dr. X");
        assert_eq!(profile.min_year(), Some(2020));
        assert_eq!(profile.research_interests(), ["Graph Learning"]);
        assert_eq!(profile.primary_keywords(), ["gnn"]);
    }

    #[test]
    fn test_profile_deserializes_through_validation() {
        let profile: UserProfile = serde_json::from_value(json!({
            "name": "Dr. Jane Researcher",
            "researchInterests": ["Graph Neural Networks"],
            "primaryKeywords": ["graph neural networks", "graph learning"],
            "minYear": 2020,
            "scoringWeights": {"relevance": 2, "citations": 1, "recency": 1}
        }))
        .unwrap();

        assert_eq!(profile.weights().relevance, 0.5);
        assert_eq!(profile.primary_keywords().len(), 2);

        let rejected = serde_json::from_value::<UserProfile>(json!({
            "name": "Nobody",
            "primaryKeywords": ["x"],
            "scoringWeights": {"relevance": 0, "citations": 0, "recency": 0}
        }));
        assert!(rejected.unwrap_err().to_string().contains("sum to zero"));
    }

    #[test]
    fn test_profile_defaults_weights_when_omitted() {
        let profile: UserProfile =
            serde_json::from_value(json!({"primaryKeywords": ["transformers"]})).unwrap();
        assert_eq!(*profile.weights(), ScoringWeights::default());
        assert_eq!(profile.min_year(), None);
    }
}

//! Input models for MCP tool parameters.

use serde::{Deserialize, Serialize};

use super::ProfileInput;
use crate::config::{api, defaults};
use crate::error::{ToolError, ToolResult};

/// Output format for tool responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Human-readable Markdown format.
    #[default]
    Markdown,
    /// Machine-readable JSON format.
    Json,
    /// Comma-separated export records.
    Csv,
}

/// Input for the personalized recommendations tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendInput {
    /// Researcher profile; validated before the run starts.
    pub profile: ProfileInput,

    /// Papers fetched per keyword.
    #[serde(default = "default_papers_per_keyword")]
    pub papers_per_keyword: usize,

    /// Recommendations returned.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

fn default_papers_per_keyword() -> usize {
    defaults::PAPERS_PER_KEYWORD
}

fn default_top_n() -> usize {
    defaults::TOP_N
}

impl RecommendInput {
    /// Check run sizes before any request is made.
    pub fn validate(&self) -> ToolResult<()> {
        if !(1..=api::MAX_SEARCH_LIMIT).contains(&self.papers_per_keyword) {
            return Err(ToolError::validation(
                "papersPerKeyword",
                format!("must be between 1 and {}", api::MAX_SEARCH_LIMIT),
            ));
        }
        if self.top_n == 0 {
            return Err(ToolError::validation("topN", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_defaults_applied() {
        let input: RecommendInput =
            serde_json::from_value(json!({"profile": {"primaryKeywords": ["gnn"]}})).unwrap();
        assert_eq!(input.papers_per_keyword, 50);
        assert_eq!(input.top_n, 20);
        assert_eq!(input.response_format, ResponseFormat::Markdown);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_sizes_rejected() {
        let input: RecommendInput = serde_json::from_value(json!({
            "profile": {"primaryKeywords": ["gnn"]},
            "papersPerKeyword": 500,
            "responseFormat": "csv"
        }))
        .unwrap();
        assert_eq!(input.response_format, ResponseFormat::Csv);
        assert!(input.validate().unwrap_err().to_string().contains("papersPerKeyword"));
    }
}

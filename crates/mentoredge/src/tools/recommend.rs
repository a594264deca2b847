//! Recommendation tool: personalized_recommendations.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::ToolResult;
use crate::formatters;
use crate::models::{RecommendInput, UserProfile};

/// Personalized paper recommendations tool.
pub struct PersonalizedRecommendationsTool;

#[async_trait::async_trait]
impl McpTool for PersonalizedRecommendationsTool {
    fn name(&self) -> &'static str {
        "personalized_recommendations"
    }

    fn description(&self) -> &'static str {
        "Rank papers for a researcher profile. Searches each keyword, merges and \
         deduplicates results, and scores papers by search relevance, citation impact \
         and recency using the profile's weights."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "profile": {
                    "type": "object",
                    "properties": {
                        "name": {"type": "string"},
                        "researchInterests": {
                            "type": "array",
                            "items": {"type": "string"}
                        },
                        "primaryKeywords": {
                            "type": "array",
                            "items": {"type": "string"},
                            "minItems": 1,
                            "description": "One search query per keyword"
                        },
                        "minYear": {
                            "type": "integer",
                            "description": "Earliest publication year"
                        },
                        "scoringWeights": {
                            "type": "object",
                            "properties": {
                                "relevance": {"type": "number", "minimum": 0},
                                "citations": {"type": "number", "minimum": 0},
                                "recency": {"type": "number", "minimum": 0}
                            },
                            "required": ["relevance", "citations", "recency"]
                        }
                    },
                    "required": ["primaryKeywords"]
                },
                "papersPerKeyword": {
                    "type": "integer",
                    "default": 50,
                    "minimum": 1,
                    "maximum": 100
                },
                "topN": {
                    "type": "integer",
                    "default": 20,
                    "minimum": 1
                },
                "responseFormat": {
                    "type": "string",
                    "enum": ["markdown", "json", "csv"],
                    "default": "markdown"
                }
            },
            "required": ["profile"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: RecommendInput = serde_json::from_value(input)?;
        params.validate()?;

        let profile = UserProfile::try_from(params.profile)?;

        let papers =
            ctx.recommender.build(&profile, params.papers_per_keyword, params.top_n).await?;

        Ok(formatters::render_recommendations(&papers, params.response_format)?)
    }
}

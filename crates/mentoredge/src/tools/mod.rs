//! MCP tool implementations.
//!
//! Each tool:
//! 1. Parses and validates input parameters
//! 2. Runs the recommendation engine
//! 3. Formats results as Markdown, JSON or CSV

mod recommend;

pub use recommend::*;

use crate::error::ToolResult;
use crate::recommender::Recommender;

/// Tool execution context.
pub struct ToolContext {
    /// Recommendation engine bound to a paper source.
    pub recommender: Recommender,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(recommender: Recommender) -> Self {
        Self { recommender }
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "personalized_recommendations").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(
        &self,
        ctx: &ToolContext,
        input: serde_json::Value,
    ) -> ToolResult<String>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![Box::new(recommend::PersonalizedRecommendationsTool)]
}

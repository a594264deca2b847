//! Output formatters for CSV, JSON and Markdown.

mod csv;
mod json;
mod markdown;

pub use self::csv::*;
pub use self::json::*;
pub use markdown::*;

use crate::error::ExportError;
use crate::models::{ResponseFormat, ScoredPaper, UserProfile};

/// Render a recommendation list in the requested format.
pub fn render_recommendations(
    papers: &[ScoredPaper],
    format: ResponseFormat,
) -> Result<String, ExportError> {
    match format {
        ResponseFormat::Markdown => Ok(format_recommendations_markdown(papers)),
        ResponseFormat::Json => format_recommendations_json(papers),
        ResponseFormat::Csv => format_recommendations_csv(papers),
    }
}

/// Render a whole run for a terminal or a pipe.
///
/// Only Markdown carries the profile summary; JSON and CSV output is the bare
/// recommendation list so it stays parseable.
pub fn render_report(
    profile: &UserProfile,
    papers: &[ScoredPaper],
    format: ResponseFormat,
) -> Result<String, ExportError> {
    let recommendations = render_recommendations(papers, format)?;

    match format {
        ResponseFormat::Markdown => {
            Ok(format!("{}\n{recommendations}", format_profile_markdown(profile)))
        }
        ResponseFormat::Json | ResponseFormat::Csv => Ok(recommendations),
    }
}

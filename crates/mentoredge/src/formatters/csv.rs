//! CSV export of recommendation records.

use std::io::Write;
use std::path::Path;

use crate::error::ExportError;
use crate::models::{RecommendationRecord, ScoredPaper};

/// Write recommendations as CSV to any writer.
///
/// The header row is always written, so an empty list still yields a valid
/// file with the expected columns.
pub fn write_recommendations_csv<W: Write>(
    writer: W,
    papers: &[ScoredPaper],
) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    wtr.write_record(RecommendationRecord::FIELDS)?;
    for scored in papers {
        wtr.serialize(scored.to_record())?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render recommendations as a CSV string.
pub fn format_recommendations_csv(papers: &[ScoredPaper]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_recommendations_csv(&mut buffer, papers)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Export recommendations to a CSV file, replacing it if present.
pub fn export_recommendations_csv(
    path: impl AsRef<Path>,
    papers: &[ScoredPaper],
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_recommendations_csv(std::io::BufWriter::new(file), papers)?;

    tracing::info!(path = %path.display(), rows = papers.len(), "Exported recommendations");
    Ok(())
}

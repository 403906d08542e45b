//! Ranked CSV export of the latest batch.

use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::scoring::aggregate::ScoreResult;

pub const EXPORT_HEADER: [&str; 5] = ["Rank", "Resume", "ATS Score", "Status", "Decision"];

/// Renders `results` as a CSV table with a 1-based rank column.
pub fn export_csv(results: Option<&[ScoreResult]>) -> Result<Vec<u8>, AppError> {
    let results = match results {
        Some(results) if !results.is_empty() => results,
        _ => return Err(AppError::NoResults),
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_HEADER)?;
    for (i, r) in results.iter().enumerate() {
        writer.write_record([
            (i + 1).to_string(),
            r.filename.clone(),
            format!("{:?}", r.score),
            r.status.label().to_string(),
            r.decision.clone(),
        ])?;
    }
    writer
        .into_inner()
        .map_err(|e| AppError::Io(e.into_error()))
}

/// Renders the table and overwrites the export file at `path`.
pub fn write_export(results: Option<&[ScoreResult]>, path: &Path) -> Result<Vec<u8>, AppError> {
    let bytes = export_csv(results)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &bytes)?;
    info!(path = %path.display(), rows = results.map_or(0, <[_]>::len), "Exported results");
    Ok(bytes)
}

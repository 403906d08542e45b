//! Axum route handlers for the Batch API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::info;

use crate::batch::export::write_export;
use crate::batch::store::Batch;
use crate::errors::AppError;
use crate::scoring::pipeline::{score_batch, ResumeUpload};
use crate::state::AppState;

const RESUMES_FIELD: &str = "resumes";
const JOB_DESC_FIELD: &str = "job_desc";

/// POST /api/v1/batches
///
/// Multipart form: repeated `resumes` file parts plus a `job_desc` text part.
/// Scores every resume, replaces the latest batch and returns it.
pub async fn handle_submit_batch(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Batch>, AppError> {
    let mut resumes = Vec::new();
    let mut job_desc = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        match field.name() {
            Some(RESUMES_FIELD) => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read {filename}: {e}")))?;
                resumes.push(ResumeUpload {
                    filename,
                    bytes: bytes.to_vec(),
                });
            }
            Some(JOB_DESC_FIELD) => {
                job_desc = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read job_desc: {e}")))?;
            }
            _ => {}
        }
    }

    info!(uploads = resumes.len(), "Received batch submission");

    let scoring = state.scoring.clone();
    let upload_dir = state.config.upload_dir.clone();
    let batch = tokio::task::spawn_blocking(move || {
        score_batch(resumes, &job_desc, &scoring, &upload_dir)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Scoring worker failed: {e}")))??;

    state.batches.replace(batch.clone()).await;
    Ok(Json(batch))
}

/// GET /api/v1/batches/latest
pub async fn handle_latest_batch(State(state): State<AppState>) -> Result<Json<Batch>, AppError> {
    state
        .batches
        .latest()
        .await
        .map(Json)
        .ok_or(AppError::NoResults)
}

/// GET /api/v1/batches/latest/csv
///
/// Writes the ranked table to the export file and returns it as a download.
pub async fn handle_export_csv(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let latest = state.batches.latest().await;
    let results = latest.as_ref().map(|b| b.results.as_slice());
    let bytes = write_export(results, &state.config.export_path)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"ATS_Results.csv\"",
            ),
        ],
        bytes,
    ))
}

//! Request handlers

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use thesis_core::extraction::DocumentKind;
use thesis_core::report::AnalysisResponse;
use tracing::info;

use super::error::ApiError;
use super::upload::StagedUpload;
use super::AppState;

/// Multipart field carrying the document.
pub const UPLOAD_FIELD: &str = "thesis";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// GET /api/health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Thesis analyzer API is running",
    })
}

/// POST /api/analyze-thesis
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let (filename, kind, bytes) = read_upload(&mut multipart).await?;
    info!(%filename, %kind, bytes = bytes.len(), "analyzing upload");

    let extractor = state.extractor.clone();
    let upload_dir = state.upload_dir.clone();
    let report = tokio::task::spawn_blocking(move || {
        let staged = StagedUpload::write(&upload_dir, kind, &bytes)
            .map_err(|e| ApiError::Analysis(format!("could not stage upload: {e}")))?;
        let report = thesis_core::analyze_file(staged.path(), kind, &extractor)?;
        Ok::<_, ApiError>(report)
    })
    .await??;

    info!(
        %filename,
        score = report.overall_score,
        recommendations = report.recommendations.len(),
        "analysis finished"
    );

    Ok(Json(AnalysisResponse::from(report)))
}

/// Find the upload field and validate its filename before reading the body.
async fn read_upload(
    multipart: &mut Multipart,
) -> Result<(String, DocumentKind, Bytes), ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(ApiError::EmptyFilename);
        }
        let kind = DocumentKind::from_filename(&filename).ok_or(ApiError::FileTypeNotAllowed)?;
        let bytes = field.bytes().await?;
        return Ok((filename, kind, bytes));
    }

    Err(ApiError::NoFile)
}

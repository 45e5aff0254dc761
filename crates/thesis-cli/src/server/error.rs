//! Error types for the analysis API

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thesis_core::error::ThesisError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No file uploaded")]
    NoFile,

    #[error("No file selected")]
    EmptyFilename,

    #[error("File type not allowed. Please upload PDF, DOC, DOCX, or TXT files.")]
    FileTypeNotAllowed,

    #[error("Unable to extract sufficient text from the file. The file may be empty, corrupted, or contain only images.")]
    InsufficientText,

    #[error("File too large")]
    PayloadTooLarge,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Analysis failed: {0}")]
    Analysis(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoFile
            | ApiError::EmptyFilename
            | ApiError::FileTypeNotAllowed
            | ApiError::InsufficientText
            | ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "rejected request: {}", self);
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ThesisError> for ApiError {
    fn from(err: ThesisError) -> Self {
        match err {
            ThesisError::InsufficientText { .. } => ApiError::InsufficientText,
            ThesisError::UnsupportedFileType(_) => ApiError::FileTypeNotAllowed,
            other => ApiError::Analysis(other.to_string()),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::InvalidRequest(err.body_text())
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Analysis(err.to_string())
    }
}

use std::path::PathBuf;

/// Failure while turning an uploaded file into plain text.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Error reading PDF: {0}")]
    Pdf(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("Error reading DOCX: {0}")]
    Docx(String),

    #[error("Error reading TXT file: {0}")]
    Text(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ThesisError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Unable to extract sufficient text from the file. The file may be empty, corrupted, or contain only images.")]
    InsufficientText { chars: usize },

    #[error("File type not allowed. Please upload PDF, DOC, DOCX, or TXT files.")]
    UnsupportedFileType(String),

    #[error("metric computation failed: {0}")]
    Analysis(String),
}

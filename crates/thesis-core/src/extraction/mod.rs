pub mod docx;
pub mod pdftotext;

use crate::error::ExtractionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Accepted upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Doc,
    Docx,
    Txt,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Pdf,
        DocumentKind::Doc,
        DocumentKind::Docx,
        DocumentKind::Txt,
    ];

    /// Match an extension (without the dot), ignoring case.
    pub fn from_extension(ext: &str) -> Option<DocumentKind> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "doc" => Some(DocumentKind::Doc),
            "docx" => Some(DocumentKind::Docx),
            "txt" => Some(DocumentKind::Txt),
            _ => None,
        }
    }

    /// Detect the kind from the part of a filename after its last dot.
    pub fn from_filename(name: &str) -> Option<DocumentKind> {
        let (_, ext) = name.rsplit_once('.')?;
        Self::from_extension(ext)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Doc => "doc",
            DocumentKind::Docx => "docx",
            DocumentKind::Txt => "txt",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension().to_uppercase())
    }
}

/// Plain text pulled out of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub text: String,
    pub kind: DocumentKind,
}

/// Trait for PDF text extraction backends.
pub trait PdfBackend: Send + Sync {
    /// Extract the text of every page, in document order.
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ExtractionError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Dispatches extraction by document kind.
pub struct Extractor {
    pdf: Box<dyn PdfBackend>,
}

impl Extractor {
    pub fn new(pdf: Box<dyn PdfBackend>) -> Self {
        Extractor { pdf }
    }

    pub fn pdf_backend_name(&self) -> &str {
        self.pdf.backend_name()
    }

    /// Extract trimmed text from the file at `path`.
    pub fn extract(
        &self,
        path: &Path,
        kind: DocumentKind,
    ) -> Result<ExtractedDocument, ExtractionError> {
        tracing::debug!(path = %path.display(), %kind, "extracting text");

        let raw = match kind {
            DocumentKind::Pdf => {
                let pages = self.pdf.extract_pages(path)?;
                tracing::debug!(
                    pages = pages.len(),
                    backend = self.pdf.backend_name(),
                    "extracted PDF pages"
                );
                pages.join("\n")
            }
            DocumentKind::Doc | DocumentKind::Docx => docx::extract_paragraphs(path)?.join("\n"),
            DocumentKind::Txt => read_text(path)?,
        };

        Ok(ExtractedDocument {
            text: raw.trim().to_string(),
            kind,
        })
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(Box::new(pdftotext::PdftotextBackend::new()))
    }
}

/// Read a file as UTF-8 with universal newlines.
fn read_text(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|e| ExtractionError::Text(e.to_string()))?;
    Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_filename_uses_last_extension() {
        assert_eq!(
            DocumentKind::from_filename("thesis.final.PDF"),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_filename("notes.Docx"),
            Some(DocumentKind::Docx)
        );
        assert_eq!(DocumentKind::from_filename("a.doc"), Some(DocumentKind::Doc));
        assert_eq!(DocumentKind::from_filename("draft.txt"), Some(DocumentKind::Txt));
    }

    #[test]
    fn unsupported_or_missing_extensions() {
        assert_eq!(DocumentKind::from_filename("report.exe"), None);
        assert_eq!(DocumentKind::from_filename("README"), None);
        assert_eq!(DocumentKind::from_filename("pdf"), None);
        assert_eq!(DocumentKind::from_filename("archive.pdf.zip"), None);
    }

    #[test]
    fn text_extraction_reports_kind_and_trims() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.txt");
        std::fs::write(&path, "  line one\r\nline two\r\n\n").unwrap();

        let document = Extractor::default().extract(&path, DocumentKind::Txt).unwrap();
        assert_eq!(document.kind, DocumentKind::Txt);
        assert_eq!(document.text, "line one\nline two");
    }

    #[test]
    fn extension_round_trips() {
        for kind in DocumentKind::ALL {
            assert_eq!(DocumentKind::from_extension(kind.extension()), Some(kind));
        }
    }
}

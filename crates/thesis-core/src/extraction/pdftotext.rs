use crate::error::ExtractionError;
use crate::extraction::PdfBackend;
use std::path::Path;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Reading order is used rather than `-layout`, since prose matters more
/// than column alignment here.
pub struct PdftotextBackend;

impl PdftotextBackend {
    pub fn new() -> Self {
        PdftotextBackend
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBackend for PdftotextBackend {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ExtractionError> {
        let output = Command::new("pdftotext")
            .arg("-enc")
            .arg("UTF-8")
            .arg(path)
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ExtractionError::PdftotextNotFound
                } else {
                    ExtractionError::Pdf(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ExtractionError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(split_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Split pdftotext output into pages.
///
/// pdftotext terminates every page with a form feed, so the segment after
/// the last one is dropped when empty.
fn split_pages(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text.split('\x0c').map(|p| p.to_string()).collect();
    if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
        pages.pop();
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_form_feed() {
        let pages = split_pages("Page one text\n\x0cPage two text\n\x0c");
        assert_eq!(pages, vec!["Page one text\n", "Page two text\n"]);
    }

    #[test]
    fn keeps_blank_middle_pages() {
        let pages = split_pages("First\x0c\x0cThird\x0c");
        assert_eq!(pages, vec!["First", "", "Third"]);
    }

    #[test]
    fn single_page_without_terminator() {
        assert_eq!(split_pages("Only page"), vec!["Only page"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        if !PdftotextBackend::is_available() {
            return;
        }
        let result = PdftotextBackend::new().extract_pages(Path::new("/nonexistent/file.pdf"));
        assert!(result.is_err());
    }
}

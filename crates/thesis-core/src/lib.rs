pub mod error;
pub mod extraction;
pub mod metrics;
pub mod model;
pub mod report;
pub mod tokenize;

use error::ThesisError;
use extraction::{DocumentKind, Extractor};
use model::AnalysisRecord;
use report::AnalysisReport;
use std::path::Path;

/// Extracted text shorter than this (after trimming) is rejected.
pub const MIN_TEXT_CHARS: usize = 100;

/// Build process-wide lookup tables and compiled patterns.
///
/// Everything initialised here is also built lazily on first use; calling
/// this at startup moves that cost out of the first request. Safe to call
/// more than once.
pub fn init() {
    tokenize::init();
    tokenize::stopwords::init();
    metrics::passive::init();
    metrics::readability::init();
}

/// Run the five analyzers over `text` without any length check.
pub fn analyze_record(text: &str) -> AnalysisRecord {
    metrics::analyze(text)
}

/// Main API entry point: analyze extracted document text.
///
/// Rejects text that is too short to analyze meaningfully, then derives
/// recommendations and the overall score.
pub fn analyze_text(text: &str) -> Result<AnalysisReport, ThesisError> {
    let text = text.trim();
    let chars = text.chars().count();
    if chars < MIN_TEXT_CHARS {
        return Err(ThesisError::InsufficientText { chars });
    }

    let record = analyze_record(text);
    if let Some((name, value)) = record.metrics().into_iter().find(|(_, v)| !v.is_finite()) {
        return Err(ThesisError::Analysis(format!(
            "{name} is not a finite number ({value})"
        )));
    }

    let report = AnalysisReport::from_record(record);
    tracing::debug!(
        score = report.overall_score,
        recommendations = report.recommendations.len(),
        "analysis complete"
    );
    Ok(report)
}

/// Extract text from a file on disk and analyze it.
pub fn analyze_file(
    path: &Path,
    kind: DocumentKind,
    extractor: &Extractor,
) -> Result<AnalysisReport, ThesisError> {
    let document = extractor.extract(path, kind)?;
    tracing::debug!(
        kind = %document.kind,
        chars = document.text.chars().count(),
        "extracted document text"
    );
    analyze_text(&document.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }

    #[test]
    fn short_text_is_rejected() {
        let err = analyze_text("Too short to analyze.").unwrap_err();
        assert!(matches!(err, ThesisError::InsufficientText { chars: 21 }));
    }

    #[test]
    fn whitespace_only_text_is_rejected() {
        let err = analyze_text("   \n\n\t  ").unwrap_err();
        assert!(matches!(err, ThesisError::InsufficientText { chars: 0 }));
    }

    #[test]
    fn padding_does_not_count_toward_minimum() {
        let text = format!("{}{}", " ".repeat(200), "x".repeat(99));
        assert!(analyze_text(&text).is_err());
    }
}

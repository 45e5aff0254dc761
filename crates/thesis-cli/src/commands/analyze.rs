use anyhow::Context;
use std::path::PathBuf;
use thesis_core::error::ThesisError;
use thesis_core::extraction::{DocumentKind, Extractor};

use crate::output;

pub fn run(input_file: PathBuf, output_format: &str) -> anyhow::Result<()> {
    let file_name = input_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let kind = DocumentKind::from_filename(&file_name)
        .ok_or_else(|| ThesisError::UnsupportedFileType(file_name.clone()))?;

    thesis_core::init();
    let extractor = Extractor::default();
    let report = thesis_core::analyze_file(&input_file, kind, &extractor)
        .with_context(|| format!("failed to analyze {}", input_file.display()))?;

    match output_format {
        "json" => output::json::print(report)?,
        _ => output::table::print(&report),
    }

    Ok(())
}

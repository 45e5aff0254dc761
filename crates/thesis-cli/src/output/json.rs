use thesis_core::report::{AnalysisReport, AnalysisResponse};

/// Print the same body the HTTP endpoint returns.
pub fn print(report: AnalysisReport) -> serde_json::Result<()> {
    let json = serde_json::to_string_pretty(&AnalysisResponse::from(report))?;
    println!("{json}");
    Ok(())
}

pub mod recommend;
pub mod score;

use crate::model::{AnalysisRecord, Severity};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use recommend::generate_recommendations;
pub use score::overall_score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Readability,
    Structure,
    #[serde(rename = "Writing Style")]
    WritingStyle,
    #[serde(rename = "Academic Style")]
    AcademicStyle,
    #[serde(rename = "Grammar & Style")]
    GrammarAndStyle,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Readability => write!(f, "Readability"),
            Category::Structure => write!(f, "Structure"),
            Category::WritingStyle => write!(f, "Writing Style"),
            Category::AcademicStyle => write!(f, "Academic Style"),
            Category::GrammarAndStyle => write!(f, "Grammar & Style"),
        }
    }
}

/// A human-readable advisory derived from the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: Category,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub suggestion: String,
}

/// Headline numbers shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    /// Flesch Reading Ease.
    pub readability_score: f64,
}

/// Full result of analyzing one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub record: AnalysisRecord,
    pub recommendations: Vec<Recommendation>,
    pub overall_score: u8,
}

impl AnalysisReport {
    pub fn from_record(record: AnalysisRecord) -> Self {
        let recommendations = generate_recommendations(&record);
        let overall_score = overall_score(&record);
        AnalysisReport {
            record,
            recommendations,
            overall_score,
        }
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            word_count: self.record.structure.word_count,
            sentence_count: self.record.structure.sentence_count,
            paragraph_count: self.record.structure.paragraph_count,
            readability_score: self.record.readability.flesch_reading_ease,
        }
    }
}

/// Successful response body of the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub success: bool,
    pub overall_score: u8,
    pub statistics: Statistics,
    pub recommendations: Vec<Recommendation>,
}

impl From<AnalysisReport> for AnalysisResponse {
    fn from(report: AnalysisReport) -> Self {
        AnalysisResponse {
            success: true,
            overall_score: report.overall_score,
            statistics: report.statistics(),
            recommendations: report.recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_uses_camel_case_keys() {
        let mut record = AnalysisRecord::default();
        record.structure.word_count = 120;
        record.structure.sentence_count = 6;
        record.structure.paragraph_count = 2;
        record.readability.flesch_reading_ease = 45.5;
        record.academic_tone.academic_word_ratio = 10.0;

        let response = AnalysisResponse::from(AnalysisReport::from_record(record));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "success": true,
                "overallScore": 100,
                "statistics": {
                    "wordCount": 120,
                    "sentenceCount": 6,
                    "paragraphCount": 2,
                    "readabilityScore": 45.5
                },
                "recommendations": []
            })
        );
    }

    #[test]
    fn categories_serialize_as_display_names() {
        let value = serde_json::to_value(Category::GrammarAndStyle).unwrap();
        assert_eq!(value, json!("Grammar & Style"));
        assert_eq!(Category::AcademicStyle.to_string(), "Academic Style");
    }
}

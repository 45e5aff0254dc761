use super::{Category, Recommendation};
use crate::model::{AnalysisRecord, Severity};

/// Map an analysis record to advisories.
///
/// Threshold rules are evaluated independently in a fixed order, followed by
/// one recommendation per style issue in detection order.
pub fn generate_recommendations(record: &AnalysisRecord) -> Vec<Recommendation> {
    let mut out = Vec::new();
    let readability = &record.readability;

    if readability.flesch_reading_ease < 30.0 {
        out.push(Recommendation {
            category: Category::Readability,
            title: "Very Difficult Text".into(),
            description: "The text is very difficult to read. Consider simplifying sentence structures and vocabulary.".into(),
            severity: Severity::High,
            suggestion: "Aim for a Flesch Reading Ease score between 30-50 for academic writing.".into(),
        });
    }

    if readability.flesch_kincaid_grade > 16.0 {
        out.push(Recommendation {
            category: Category::Readability,
            title: "High Education Level Required".into(),
            description: format!(
                "The text requires {:.1} years of education to understand.",
                readability.flesch_kincaid_grade
            ),
            severity: Severity::Medium,
            suggestion: "Consider making the text more accessible without losing academic rigor."
                .into(),
        });
    }

    if record.structure.avg_sentence_length > 25.0 {
        out.push(Recommendation {
            category: Category::Structure,
            title: "Long Sentences".into(),
            description: "Average sentence length is quite long, which may affect readability."
                .into(),
            severity: Severity::Medium,
            suggestion: "Break long sentences into shorter, more focused ones.".into(),
        });
    }

    if record.passive_voice.passive_percentage > 20.0 {
        out.push(Recommendation {
            category: Category::WritingStyle,
            title: "Passive Voice Overuse".into(),
            description: format!(
                "{}% of sentences use passive voice.",
                record.passive_voice.passive_percentage
            ),
            severity: Severity::Medium,
            suggestion: "Use active voice for more direct and engaging writing.".into(),
        });
    }

    if record.academic_tone.academic_word_ratio < 5.0 {
        out.push(Recommendation {
            category: Category::AcademicStyle,
            title: "Limited Academic Vocabulary".into(),
            description:
                "The text could benefit from more academic transition words and phrases.".into(),
            severity: Severity::Low,
            suggestion: "Incorporate academic transition words like \"however\", \"therefore\", \"moreover\".".into(),
        });
    }

    out.extend(record.style_issues.iter().map(|issue| Recommendation {
        category: Category::GrammarAndStyle,
        title: issue.kind.title().into(),
        description: issue.description.clone(),
        severity: issue.severity,
        suggestion: "Review the highlighted sentence for improvement.".into(),
    }));

    out
}

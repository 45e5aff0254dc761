pub mod academic;
pub mod passive;
pub mod readability;
pub mod structure;
pub mod style;

use crate::model::AnalysisRecord;
use crate::tokenize;

/// Run every analyzer over the same text and collect the results.
///
/// Sentences are tokenized once and shared by the sentence-level analyzers.
pub fn analyze(text: &str) -> AnalysisRecord {
    let sentences = tokenize::sentences(text);
    let words = tokenize::words(text);
    tracing::debug!(
        sentences = sentences.len(),
        words = words.len(),
        "tokenized document"
    );

    AnalysisRecord {
        readability: readability::analyze(text),
        structure: structure::analyze(text, &sentences, &words),
        passive_voice: passive::detect(&sentences),
        academic_tone: academic::check(text),
        style_issues: style::check(&sentences),
    }
}

/// Round to `places` decimal places, ties to even.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// `numerator / denominator`, or 0 when the denominator is zero.
pub(crate) fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_two_places() {
        assert_eq!(round_to(33.3333, 2), 33.33);
        assert_eq!(round_to(66.6666, 2), 66.67);
        assert_eq!(round_to(12.0, 2), 12.0);
    }

    #[test]
    fn exact_halves_round_to_even() {
        // 9 of 32 sentences
        assert_eq!(round_to(900.0 / 32.0, 2), 28.12);
        assert_eq!(round_to(0.5, 0), 0.0);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(-1.5, 0), -2.0);
    }

    #[test]
    fn ratio_guards_zero_divisor() {
        assert_eq!(ratio(10.0, 0), 0.0);
        assert_eq!(ratio(10.0, 4), 2.5);
    }

    #[test]
    fn empty_text_yields_zeroed_record() {
        let record = analyze("");
        assert_eq!(record.structure.word_count, 0);
        assert_eq!(record.structure.avg_sentence_length, 0.0);
        assert_eq!(record.passive_voice.passive_percentage, 0.0);
        assert_eq!(record.academic_tone.academic_word_ratio, 0.0);
        assert!(record.style_issues.is_empty());
        assert!(record.metrics().iter().all(|(_, v)| v.is_finite()));
    }
}

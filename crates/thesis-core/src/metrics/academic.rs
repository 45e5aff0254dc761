use super::{ratio, round_to};
use crate::model::AcademicTone;
use crate::tokenize::{self, stopwords::is_stopword};

/// Discourse markers associated with formal academic prose.
pub const ACADEMIC_WORDS: &[&str] = &[
    "however",
    "therefore",
    "moreover",
    "furthermore",
    "consequently",
    "nevertheless",
    "notwithstanding",
    "accordingly",
    "additionally",
    "significantly",
    "substantially",
    "considerably",
    "remarkably",
];

/// Measure how much of the content vocabulary is academic transition words.
///
/// Content words are lowercase, purely alphabetic tokens that are not
/// stop-words.
pub fn check(text: &str) -> AcademicTone {
    let lowered = text.to_lowercase();
    let content_words: Vec<String> = tokenize::words(&lowered)
        .into_iter()
        .filter(|w| is_alphabetic(w) && !is_stopword(w))
        .collect();

    let academic_word_count = content_words
        .iter()
        .filter(|w| ACADEMIC_WORDS.contains(&w.as_str()))
        .count();

    AcademicTone {
        academic_word_count,
        academic_word_ratio: round_to(
            ratio(academic_word_count as f64 * 100.0, content_words.len()),
            2,
        ),
    }
}

pub(crate) fn is_alphabetic(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_transition_words_among_content_words() {
        // content words: however, results, clear, therefore, proceed
        let tone = check("However, the results are clear and therefore we proceed.");
        assert_eq!(tone.academic_word_count, 2);
        assert_eq!(tone.academic_word_ratio, 40.0);
    }

    #[test]
    fn stopwords_and_punctuation_are_ignored() {
        let tone = check("The and of is ... , ; 42");
        assert_eq!(tone, AcademicTone::default());
    }

    #[test]
    fn sentence_final_periods_are_detached() {
        // content words: however, results, clear, therefore, proceed
        let tone = check("However, the results are clear. therefore we proceed.");
        assert_eq!(tone.academic_word_count, 2);
        assert_eq!(tone.academic_word_ratio, 40.0);
    }

    #[test]
    fn word_before_period_counts_as_content() {
        // content words: results, improved, therefore, proceed
        let tone = check("Results improved. Therefore we proceed.");
        assert_eq!(tone.academic_word_count, 1);
        assert_eq!(tone.academic_word_ratio, 25.0);
    }

    #[test]
    fn transition_word_ending_a_sentence_is_counted() {
        // content words: studies, agree, however, results, differ
        let tone = check("Most studies agree, however. Some results differ.");
        assert_eq!(tone.academic_word_count, 1);
        assert_eq!(tone.academic_word_ratio, 20.0);
    }

    #[test]
    fn case_insensitive() {
        let tone = check("MOREOVER Furthermore");
        assert_eq!(tone.academic_word_count, 2);
        assert_eq!(tone.academic_word_ratio, 100.0);
    }

    #[test]
    fn no_academic_vocabulary() {
        let tone = check("Cats like fish. Dogs like bones.");
        assert_eq!(tone.academic_word_count, 0);
        assert_eq!(tone.academic_word_ratio, 0.0);
    }
}

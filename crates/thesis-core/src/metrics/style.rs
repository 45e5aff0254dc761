use super::academic::is_alphabetic;
use crate::model::{Severity, StyleIssue, StyleIssueKind};
use crate::tokenize;
use std::collections::HashMap;

/// Sentences with more tokens than this are flagged as too long.
pub const LONG_SENTENCE_TOKENS: usize = 50;
/// A word occurring more often than this within one sentence is repetitive.
pub const REPETITION_THRESHOLD: usize = 3;

const EXCERPT_CHARS: usize = 100;

/// Per-sentence checks for overly long sentences and repeated words.
pub fn check(sentences: &[String]) -> Vec<StyleIssue> {
    let mut issues = Vec::new();

    for sentence in sentences {
        if tokenize::words(sentence).len() > LONG_SENTENCE_TOKENS {
            issues.push(StyleIssue {
                kind: StyleIssueKind::LongSentence,
                description: "Sentence is very long and may be hard to read".into(),
                excerpt: excerpt(sentence),
                severity: Severity::Medium,
            });
        }

        let repeated = repeated_words(sentence);
        if !repeated.is_empty() {
            let listed: Vec<&str> = repeated.iter().take(3).map(String::as_str).collect();
            issues.push(StyleIssue {
                kind: StyleIssueKind::WordRepetition,
                description: format!("Repeated words: {}", listed.join(", ")),
                excerpt: sentence.clone(),
                severity: Severity::Low,
            });
        }
    }

    issues
}

/// First 100 characters of a sentence, with an ellipsis when cut.
fn excerpt(sentence: &str) -> String {
    if sentence.chars().count() > EXCERPT_CHARS {
        let cut: String = sentence.chars().take(EXCERPT_CHARS).collect();
        format!("{cut}...")
    } else {
        sentence.to_string()
    }
}

/// Lowercase alphabetic words occurring more than the threshold, in order
/// of first appearance.
fn repeated_words(sentence: &str) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for word in tokenize::words(&sentence.to_lowercase()) {
        if !is_alphabetic(&word) {
            continue;
        }
        let count = counts.entry(word.clone()).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter(|w| counts.get(w).is_some_and(|&c| c > REPETITION_THRESHOLD))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::sentences;

    #[test]
    fn repeated_word_yields_one_issue() {
        let s = sentences("This test is a test of the test and the test.");
        let issues = check(&s);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, StyleIssueKind::WordRepetition);
        assert_eq!(issues[0].description, "Repeated words: test");
        assert_eq!(issues[0].severity, Severity::Low);
        assert_eq!(issues[0].excerpt, s[0]);
    }

    #[test]
    fn three_occurrences_are_fine() {
        let s = sentences("A test, a test, a test.");
        assert!(check(&s).is_empty());
    }

    #[test]
    fn repetition_is_case_insensitive_and_lists_at_most_three() {
        let s = sentences(
            "Go go GO go, stop stop stop stop, run run run run, jump jump jump jump, sit.",
        );
        let issues = check(&s);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].description, "Repeated words: go, stop, run");
    }

    #[test]
    fn long_sentence_is_truncated() {
        let sentence = format!("{}end.", "alpha beta gamma delta ".repeat(13));
        let issues = check(&sentences(&sentence));
        let long: Vec<_> = issues
            .iter()
            .filter(|i| i.kind == StyleIssueKind::LongSentence)
            .collect();
        assert_eq!(long.len(), 1);
        assert_eq!(long[0].severity, Severity::Medium);
        assert!(long[0].excerpt.ends_with("..."));
        assert_eq!(long[0].excerpt.chars().count(), 103);
    }

    #[test]
    fn long_sentence_can_also_repeat() {
        let sentence = format!("{}.", "the cat ".repeat(30));
        let kinds: Vec<_> = check(&sentences(&sentence)).into_iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![StyleIssueKind::LongSentence, StyleIssueKind::WordRepetition]
        );
    }

    #[test]
    fn short_excerpt_is_untouched() {
        assert_eq!(excerpt("Short one."), "Short one.");
    }
}

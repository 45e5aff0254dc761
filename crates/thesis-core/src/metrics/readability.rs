//! Classic readability indices.
//!
//! Word, sentence and syllable counts are taken over the raw text (not the
//! Treebank tokens used elsewhere): words are whitespace-separated after
//! stripping punctuation, and sentences shorter than three words are not
//! counted.

use super::{ratio, round_to};
use crate::model::Readability;
use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[^.!?]+[.!?]*").expect("sentence segment pattern is valid"));

pub(crate) fn init() {
    LazyLock::force(&SENTENCE_SEGMENT);
}

/// Raw counts feeding the readability formulas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextCounts {
    pub words: usize,
    pub sentences: usize,
    pub syllables: usize,
    pub polysyllables: usize,
    /// Letters and digits.
    pub letters: usize,
    /// Non-whitespace characters, punctuation included.
    pub characters: usize,
}

impl TextCounts {
    pub fn of(text: &str) -> Self {
        let words = lexicon(text);
        let syllable_counts: Vec<usize> = words.iter().map(|w| syllables(w)).collect();

        TextCounts {
            words: words.len(),
            sentences: sentence_count(text),
            syllables: syllable_counts.iter().sum(),
            polysyllables: syllable_counts.iter().filter(|&&s| s >= 3).count(),
            letters: text.chars().filter(|c| c.is_alphanumeric()).count(),
            characters: text.chars().filter(|c| !c.is_whitespace()).count(),
        }
    }

    fn words_per_sentence(&self) -> f64 {
        ratio(self.words as f64, self.sentences)
    }

    fn syllables_per_word(&self) -> f64 {
        ratio(self.syllables as f64, self.words)
    }
}

pub fn analyze(text: &str) -> Readability {
    let counts = TextCounts::of(text);
    if counts.words == 0 {
        return Readability::default();
    }

    Readability {
        flesch_reading_ease: flesch_reading_ease(&counts),
        flesch_kincaid_grade: flesch_kincaid_grade(&counts),
        gunning_fog: gunning_fog(&counts),
        smog_index: smog_index(&counts),
        automated_readability_index: automated_readability_index(&counts),
        coleman_liau_index: coleman_liau_index(&counts),
    }
}

pub fn flesch_reading_ease(c: &TextCounts) -> f64 {
    let score = 206.835 - 1.015 * c.words_per_sentence() - 84.6 * c.syllables_per_word();
    round_to(score, 2)
}

pub fn flesch_kincaid_grade(c: &TextCounts) -> f64 {
    let grade = 0.39 * c.words_per_sentence() + 11.8 * c.syllables_per_word() - 15.59;
    round_to(grade, 1)
}

pub fn gunning_fog(c: &TextCounts) -> f64 {
    let complex_pct = ratio(c.polysyllables as f64 * 100.0, c.words);
    round_to(0.4 * (c.words_per_sentence() + complex_pct), 2)
}

/// SMOG needs at least three sentences; shorter texts score 0.
pub fn smog_index(c: &TextCounts) -> f64 {
    if c.sentences < 3 {
        return 0.0;
    }
    let grade = 1.043 * (c.polysyllables as f64 * 30.0 / c.sentences as f64).sqrt() + 3.1291;
    round_to(grade, 1)
}

pub fn automated_readability_index(c: &TextCounts) -> f64 {
    let chars_per_word = ratio(c.characters as f64, c.words);
    round_to(4.71 * chars_per_word + 0.5 * c.words_per_sentence() - 21.43, 1)
}

pub fn coleman_liau_index(c: &TextCounts) -> f64 {
    let letters_per_100 = ratio(c.letters as f64 * 100.0, c.words);
    let sentences_per_100 = ratio(c.sentences as f64 * 100.0, c.words);
    round_to(0.0588 * letters_per_100 - 0.296 * sentences_per_100 - 15.8, 2)
}

/// Whitespace-separated words after removing punctuation other than
/// apostrophes.
fn lexicon(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_' || *c == '\'')
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Sentence segments with more than two words; at least one for any text.
fn sentence_count(text: &str) -> usize {
    let segments: Vec<&str> = SENTENCE_SEGMENT
        .find_iter(text)
        .map(|m| m.as_str())
        .collect();
    let ignored = segments.iter().filter(|s| lexicon(s).len() <= 2).count();
    (segments.len() - ignored).max(1)
}

/// Vowel-group syllable estimate for a single word.
pub fn syllables(word: &str) -> usize {
    let w: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if w.is_empty() {
        return 0;
    }
    if w.chars().count() <= 3 {
        return 1;
    }

    let mut count = 0;
    let mut prev_vowel = false;
    for c in w.chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    // silent endings
    if count > 1 {
        if w.ends_with('e') && !w.ends_with("le") {
            count -= 1;
        } else if (w.ends_with("es") || w.ends_with("ed"))
            && !["ted", "ded", "ses", "ces", "zes", "ges", "xes", "shes", "ches"]
                .iter()
                .any(|s| w.ends_with(s))
        {
            count -= 1;
        }
    }

    count.max(1)
}

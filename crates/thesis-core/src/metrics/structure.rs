use super::{ratio, round_to};
use crate::model::Structure;
use crate::tokenize;

/// Count words, sentences and paragraphs and derive average lengths.
pub fn analyze(text: &str, sentences: &[String], words: &[String]) -> Structure {
    let paragraph_count = tokenize::paragraphs(text).len();
    let word_count = words.len();

    Structure {
        word_count,
        sentence_count: sentences.len(),
        paragraph_count,
        avg_sentence_length: round_to(ratio(word_count as f64, sentences.len()), 2),
        avg_words_per_paragraph: round_to(ratio(word_count as f64, paragraph_count), 2),
    }
}

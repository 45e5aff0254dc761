use super::{ratio, round_to};
use crate::model::PassiveVoice;
use regex::Regex;
use std::sync::LazyLock;

/// A be-verb followed by a word ending in `-ed` or `-en`.
static PASSIVE_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        r"(?i)\b(am|is|are|was|were|be|being|been)\s+\w+ed\b",
        r"(?i)\b(am|is|are|was|were|be|being|been)\s+\w+en\b",
    ]
    .map(|p| Regex::new(p).expect("passive voice pattern is valid"))
});

pub(crate) fn init() {
    LazyLock::force(&PASSIVE_PATTERNS);
}

/// Whether a sentence matches any passive-voice pattern.
pub fn is_passive(sentence: &str) -> bool {
    PASSIVE_PATTERNS.iter().any(|re| re.is_match(sentence))
}

/// Count sentences that look like passive voice.
///
/// This is pattern matching, not grammatical analysis: adjectives ending in
/// `-ed` after a be-verb are counted too.
pub fn detect(sentences: &[String]) -> PassiveVoice {
    let passive_sentences = sentences.iter().filter(|s| is_passive(s)).count();

    PassiveVoice {
        passive_sentences,
        passive_percentage: round_to(ratio(passive_sentences as f64 * 100.0, sentences.len()), 2),
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        })
    }
}

/// Standard readability indices for the whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Readability {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub gunning_fog: f64,
    pub smog_index: f64,
    pub automated_readability_index: f64,
    pub coleman_liau_index: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    /// Words per sentence, 0 when there are no sentences.
    pub avg_sentence_length: f64,
    /// Words per paragraph, 0 when there are no paragraphs.
    pub avg_words_per_paragraph: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassiveVoice {
    pub passive_sentences: usize,
    pub passive_percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcademicTone {
    pub academic_word_count: usize,
    pub academic_word_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleIssueKind {
    LongSentence,
    WordRepetition,
}

impl StyleIssueKind {
    /// Display title, e.g. "Long Sentence".
    pub fn title(&self) -> &'static str {
        match self {
            StyleIssueKind::LongSentence => "Long Sentence",
            StyleIssueKind::WordRepetition => "Word Repetition",
        }
    }
}

impl fmt::Display for StyleIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleIssueKind::LongSentence => write!(f, "long_sentence"),
            StyleIssueKind::WordRepetition => write!(f, "word_repetition"),
        }
    }
}

/// A heuristic style problem found in a single sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleIssue {
    #[serde(rename = "type")]
    pub kind: StyleIssueKind,
    pub description: String,
    /// The offending sentence, possibly truncated.
    #[serde(rename = "sentence")]
    pub excerpt: String,
    pub severity: Severity,
}

/// Combined output of the five analyzers over one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub readability: Readability,
    pub structure: Structure,
    pub passive_voice: PassiveVoice,
    pub academic_tone: AcademicTone,
    pub style_issues: Vec<StyleIssue>,
}

impl AnalysisRecord {
    /// Every floating-point metric in the record, labelled.
    pub fn metrics(&self) -> [(&'static str, f64); 10] {
        [
            ("flesch_reading_ease", self.readability.flesch_reading_ease),
            ("flesch_kincaid_grade", self.readability.flesch_kincaid_grade),
            ("gunning_fog", self.readability.gunning_fog),
            ("smog_index", self.readability.smog_index),
            (
                "automated_readability_index",
                self.readability.automated_readability_index,
            ),
            ("coleman_liau_index", self.readability.coleman_liau_index),
            ("avg_sentence_length", self.structure.avg_sentence_length),
            (
                "avg_words_per_paragraph",
                self.structure.avg_words_per_paragraph,
            ),
            ("passive_percentage", self.passive_voice.passive_percentage),
            ("academic_word_ratio", self.academic_tone.academic_word_ratio),
        ]
    }
}

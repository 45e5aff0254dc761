pub mod stopwords;

use std::collections::HashSet;
use std::sync::LazyLock;

/// Abbreviations whose trailing period does not end a sentence.
static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "dr", "mr", "mrs", "ms", "prof", "e.g", "i.e", "etc", "vs", "fig", "al", "no", "vol",
        "pp", "ch", "sec", "jr", "sr", "st",
    ]
    .into_iter()
    .collect()
});

const TERMINATORS: &[char] = &['.', '!', '?'];
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '\u{201d}', '\u{2019}'];
const LEADING: &[char] = &[
    '"', '\'', '(', '[', '{', '<', '`', '\u{201c}', '\u{2018}',
];
const TRAILING: &[char] = &[
    ',', ';', ':', '!', '?', ')', ']', '}', '>', '"', '\'', '%', '\u{201d}', '\u{2019}',
];

/// Force the abbreviation table to be built.
pub(crate) fn init() {
    LazyLock::force(&ABBREVIATIONS);
}

/// Split text into sentences.
///
/// A sentence ends at a run of `.`, `!` or `?` (plus any closing quotes or
/// brackets) followed by whitespace. A lone period after a known
/// abbreviation or a single-letter initial is never a boundary; an ellipsis
/// or a period after a number is one only when the next word does not start
/// lowercase. Text without terminators is one sentence.
pub fn sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut out = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let (_, c) = chars[i];
        if !TERMINATORS.contains(&c) {
            i += 1;
            continue;
        }

        let run_start = i;
        while i < chars.len() && TERMINATORS.contains(&chars[i].1) {
            i += 1;
        }
        let run_len = i - run_start;
        while i < chars.len() && CLOSERS.contains(&chars[i].1) {
            i += 1;
        }
        let end = chars.get(i).map(|(b, _)| *b).unwrap_or(text.len());

        let boundary = match chars.get(i) {
            None => true,
            Some((_, next)) if next.is_whitespace() => {
                let following = chars[i..].iter().map(|(_, c)| *c).find(|c| !c.is_whitespace());
                let starts_lowercase = following.is_some_and(|c| c.is_lowercase());
                let periods_only = chars[run_start..run_start + run_len]
                    .iter()
                    .all(|(_, c)| *c == '.');

                if !periods_only {
                    true
                } else if run_len > 1 {
                    // ellipsis
                    !starts_lowercase
                } else {
                    let token = last_token(&text[start..chars[run_start].0]);
                    if is_abbreviation(&token) {
                        false
                    } else if is_number(&token) {
                        !starts_lowercase
                    } else {
                        true
                    }
                }
            }
            Some(_) => false,
        };

        if boundary {
            push_trimmed(&mut out, &text[start..end]);
            start = end;
        }
    }

    push_trimmed(&mut out, &text[start..]);
    out
}

fn push_trimmed(out: &mut Vec<String>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

/// The whitespace-delimited token at the end of `before`, lowercased and
/// without leading quotes or brackets.
fn last_token(before: &str) -> String {
    before
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(LEADING)
        .to_lowercase()
}

/// Known abbreviation or single-letter initial.
fn is_abbreviation(token: &str) -> bool {
    let mut letters = token.chars();
    let single_initial =
        matches!((letters.next(), letters.next()), (Some(c), None) if c.is_alphabetic());
    single_initial || ABBREVIATIONS.contains(token)
}

fn is_number(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

/// Tokenize text into words and punctuation tokens.
///
/// Text is first split into sentences; each sentence is then tokenized with
/// Penn Treebank conventions. Punctuation tokens are included in the result.
pub fn words(text: &str) -> Vec<String> {
    sentences(text)
        .iter()
        .flat_map(|sentence| treebank_tokens(sentence))
        .collect()
}

/// Split text into paragraphs separated by blank lines.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n").filter(|p| !p.trim().is_empty()).collect()
}

fn treebank_tokens(sentence: &str) -> Vec<String> {
    let chunks: Vec<&str> = sentence.split_whitespace().collect();
    let mut tokens = Vec::new();

    for (idx, chunk) in chunks.iter().enumerate() {
        let is_last = idx + 1 == chunks.len();

        if !chunk.chars().any(char::is_alphanumeric) {
            tokens.push(chunk.to_string());
            continue;
        }

        let mut core: &str = chunk;
        while let Some(c) = core.chars().next().filter(|c| LEADING.contains(c)) {
            tokens.push(c.to_string());
            core = &core[c.len_utf8()..];
        }

        let mut trailing = Vec::new();
        loop {
            if let Some(rest) = core.strip_suffix("...") {
                trailing.push("...".to_string());
                core = rest;
            } else if let Some(c) = core.chars().next_back().filter(|c| TRAILING.contains(c)) {
                trailing.push(c.to_string());
                core = &core[..core.len() - c.len_utf8()];
            } else if is_last && core.ends_with('.') && core.len() > 1 {
                trailing.push(".".to_string());
                core = &core[..core.len() - 1];
            } else {
                break;
            }
        }

        split_clitics(core, &mut tokens);
        tokens.extend(trailing.into_iter().rev());
    }

    tokens
}

fn split_clitics(word: &str, tokens: &mut Vec<String>) {
    if word.is_empty() {
        return;
    }
    let lower = word.to_lowercase();
    if lower == "cannot" {
        tokens.push(word[..3].to_string());
        tokens.push(word[3..].to_string());
        return;
    }

    let clitic_len = if lower.ends_with("n't") && lower.len() > 3 {
        3
    } else if ["'ll", "'re", "'ve"].iter().any(|s| lower.ends_with(s)) && lower.len() > 3 {
        3
    } else if ["'s", "'m", "'d"].iter().any(|s| lower.ends_with(s)) && lower.len() > 2 {
        2
    } else {
        0
    };

    if clitic_len == 0 {
        tokens.push(word.to_string());
    } else {
        let split = word.len() - clitic_len;
        tokens.push(word[..split].to_string());
        tokens.push(word[split..].to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_simple_sentences() {
        let s = sentences("The cake was eaten. The ball was thrown. The door was opened.");
        assert_eq!(
            s,
            vec![
                "The cake was eaten.",
                "The ball was thrown.",
                "The door was opened."
            ]
        );
    }

    #[test]
    fn punctuation_free_text_is_one_sentence() {
        let text = "word ".repeat(150);
        let s = sentences(&text);
        assert_eq!(s.len(), 1);
        assert_eq!(words(&text).len(), 150);
    }

    #[test]
    fn empty_text_has_no_sentences() {
        assert!(sentences("").is_empty());
        assert!(sentences("   \n\t").is_empty());
        assert!(words("").is_empty());
    }

    #[test]
    fn abbreviations_do_not_end_sentences() {
        let s = sentences("Dr. Smith wrote it, e.g. in 2020. See Fig. 3 for details.");
        assert_eq!(s.len(), 2);
        assert_eq!(s[0], "Dr. Smith wrote it, e.g. in 2020.");
    }

    #[test]
    fn initials_do_not_end_sentences() {
        let s = sentences("As J. R. Tolkien noted, words matter. Indeed they do.");
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn period_after_ordinary_word_ends_sentence() {
        let s = sentences("The test ended. then we left the room.");
        assert_eq!(s, vec!["The test ended.", "then we left the room."]);
    }

    #[test]
    fn lowercase_after_abbreviation_continues() {
        let s = sentences("see dr. smith and prof. jones. then leave.");
        assert_eq!(s, vec!["see dr. smith and prof. jones.", "then leave."]);
    }

    #[test]
    fn numbers_and_ellipses_check_next_word_case() {
        assert_eq!(sentences("It rose in 2020. then it fell.").len(), 1);
        assert_eq!(sentences("It rose in 2020. Then it fell.").len(), 2);
        assert_eq!(sentences("We waited... and waited.").len(), 1);
        assert_eq!(sentences("We waited... Nothing came.").len(), 2);
    }

    #[test]
    fn question_and_exclamation_runs() {
        let s = sentences("Why?! Because \"it works.\" Fine...");
        assert_eq!(s, vec!["Why?!", "Because \"it works.\"", "Fine..."]);
    }

    #[test]
    fn decimal_numbers_stay_inside_sentence() {
        let s = sentences("The value rose to 3.5 percent. It fell again.");
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn treebank_punctuation_and_clitics() {
        let w = words("I don't think (really) it's fine, they're sure.");
        assert_eq!(
            w,
            vec![
                "I", "do", "n't", "think", "(", "really", ")", "it", "'s", "fine", ",", "they",
                "'re", "sure", "."
            ]
        );
    }

    #[test]
    fn cannot_is_split() {
        assert_eq!(words("We cannot stop"), vec!["We", "can", "not", "stop"]);
    }

    #[test]
    fn inner_periods_are_kept() {
        let w = words("Use e.g. values like 3.14 here.");
        assert!(w.contains(&"e.g.".to_string()));
        assert!(w.contains(&"3.14".to_string()));
        assert_eq!(w.last().map(String::as_str), Some("."));
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let text = "First para.\n\nSecond para.\n\n\n\nThird.\n\n   \n\n";
        assert_eq!(paragraphs(text).len(), 3);
        assert!(paragraphs("").is_empty());
    }
}

// Sentence Segmenter
// Boundary-aware sentence splitting behind the external-capability seam

use std::collections::HashSet;
use std::sync::LazyLock;

use thiserror::Error;

/// Common English abbreviations that end with a period but do not close a
/// sentence.
static ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "rev.", "gen.", "sen.", "rep.", "sr.", "jr.", "st.",
    "vs.", "etc.", "e.g.", "i.e.", "cf.", "fig.", "no.", "vol.", "dept.", "inc.", "ltd.", "co.",
    "corp.", "approx.", "est.", "min.", "max.", "jan.", "feb.", "mar.", "apr.", "jun.", "jul.",
    "aug.", "sep.", "sept.", "oct.", "nov.", "dec.", "u.s.", "u.k.", "a.m.", "p.m.",
];

static ABBREVIATIONS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ABBREVIATIONS.iter().copied().collect());

/// Double-quote characters tracked so terminators inside quotations do not
/// split the sentence. Apostrophes are deliberately excluded.
const QUOTE_CHARS: &[char] = &['"', '\u{201c}', '\u{201d}'];

const BOUNDARY_PUNCTUATION: &[char] = &['"', '\u{201c}', '\'', '(', '[', '{'];

#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("segmentation backend unavailable: {0}")]
    Unavailable(String),
}

/// The sentence-boundary capability consumed by the pipeline.
pub trait SentenceSegmenter: Send + Sync {
    /// Ordered, trimmed, non-empty sentences. Empty input yields an empty vec.
    fn segment(&self, text: &str) -> Result<Vec<String>, SegmentError>;
}

/// Shipped segmenter: quote-aware, decimal-aware and abbreviation-aware
/// character walk. A terminator only closes a sentence when the next
/// non-space character looks like a sentence opener.
pub struct RuleSegmenter;

impl SentenceSegmenter for RuleSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>, SegmentError> {
        Ok(split_sentences(text))
    }
}

pub fn split_sentences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    let chars: Vec<char> = text.chars().collect();
    let mut sentences: Vec<String> = Vec::new();
    let mut buffer = String::new();
    let mut in_quote = false;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        buffer.push(ch);

        if QUOTE_CHARS.contains(&ch) {
            in_quote = !in_quote;
        }

        if matches!(ch, '.' | '!' | '?') && !in_quote {
            // Decimal numbers like 3.14 are not boundaries.
            if ch == '.'
                && i > 0
                && i + 1 < chars.len()
                && chars[i - 1].is_ascii_digit()
                && chars[i + 1].is_ascii_digit()
            {
                i += 1;
                continue;
            }

            if ch == '.' && tail_is_abbreviation(&buffer) {
                i += 1;
                continue;
            }

            // Swallow terminator runs (ellipses, "?!").
            while i + 1 < chars.len() && matches!(chars[i + 1], '.' | '!' | '?') {
                i += 1;
                buffer.push(chars[i]);
            }

            let next_non_space = chars[i + 1..].iter().copied().find(|c| !c.is_whitespace());
            let should_break = match next_non_space {
                None => true,
                Some(c) => {
                    c.is_uppercase() || c.is_ascii_digit() || BOUNDARY_PUNCTUATION.contains(&c)
                }
            };

            if should_break {
                flush(&mut buffer, &mut sentences);
            }
        }

        i += 1;
    }

    flush(&mut buffer, &mut sentences);
    sentences
}

fn flush(buffer: &mut String, sentences: &mut Vec<String>) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    buffer.clear();
}

fn tail_is_abbreviation(buffer: &str) -> bool {
    let Some(last) = buffer.split_whitespace().last() else {
        return false;
    };
    if is_initial(last) {
        return true;
    }
    ABBREVIATIONS_SET.contains(last.to_lowercase().as_str())
}

/// Single-letter initials such as "J." in "J. Smith".
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(first), Some('.'), None) if first.is_uppercase()
    )
}

// Readability Scorer
// Flesch Reading Ease over a whole text (higher = easier)

/// Flesch Reading Ease. Pure function of the text; any degenerate input
/// (no scorable words) yields 0.0 instead of an error.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words: Vec<&str> = text
        .split_whitespace()
        .filter(|w| w.chars().any(|c| c.is_alphanumeric()))
        .collect();
    if words.is_empty() {
        return 0.0;
    }

    let sentences = count_sentences(text).max(1) as f64;
    let word_count = words.len() as f64;
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    206.835 - 1.015 * (word_count / sentences) - 84.6 * (syllables as f64 / word_count)
}

fn count_sentences(text: &str) -> usize {
    let mut count = 0;
    let mut in_terminator = false;
    for ch in text.chars() {
        if matches!(ch, '.' | '!' | '?') {
            if !in_terminator {
                count += 1;
            }
            in_terminator = true;
        } else {
            in_terminator = false;
        }
    }
    count
}

/// Heuristic English syllable count: vowel groups, minus a silent trailing
/// "e", never below one.
fn count_syllables(word: &str) -> usize {
    let lower: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect::<String>()
        .to_lowercase();
    if lower.is_empty() {
        return 1;
    }

    let mut syllables = 0;
    let mut prev_was_vowel = false;
    for ch in lower.chars() {
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !prev_was_vowel {
            syllables += 1;
        }
        prev_was_vowel = is_vowel;
    }

    if lower.ends_with('e') && !lower.ends_with("le") && syllables > 1 {
        syllables -= 1;
    }

    syllables.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(flesch_reading_ease(""), 0.0);
        assert_eq!(flesch_reading_ease("... !!! ???"), 0.0);
    }

    #[test]
    fn test_scoring_is_pure() {
        let text = "The cat sat on the mat. It purred quietly all night long.";
        let first = flesch_reading_ease(text);
        for _ in 0..5 {
            assert_eq!(flesch_reading_ease(text), first);
        }
    }

    #[test]
    fn test_simple_text_scores_higher_than_dense_text() {
        let simple = "The dog ran. The dog sat. The dog ate.";
        let dense = "Notwithstanding considerable organizational complexities, interdepartmental \
                     collaboration necessitates comprehensive administrative coordination.";
        assert!(flesch_reading_ease(simple) > flesch_reading_ease(dense));
    }

    #[test]
    fn test_text_without_terminator_counts_one_sentence() {
        // A fragment still yields a finite score rather than dividing by zero.
        let score = flesch_reading_ease("just a fragment with no period");
        assert!(score.is_finite());
        assert!(score > 0.0);
    }

    #[test]
    fn test_syllable_heuristics() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("machine"), 2);
        assert_eq!(count_syllables("readability"), 5);
        assert_eq!(count_syllables("a"), 1);
    }

    #[test]
    fn test_ellipsis_counts_one_sentence() {
        assert_eq!(count_sentences("Wait... what? Really!"), 3);
    }
}

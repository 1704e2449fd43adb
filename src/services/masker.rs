// Phrase Masker
// Swaps protected phrases for placeholder tokens around generation

use std::collections::HashSet;

use regex::{NoExpand, Regex};

/// Ordered (placeholder, original phrase) pairs scoped to one
/// sentence-rewrite attempt.
pub type MaskMapping = Vec<(String, String)>;

/// Assemble the protect set from caller phrases plus extracted entities.
/// Entries must be non-empty and contain at least one alphabetic character;
/// duplicates are dropped and the result is ordered by descending length so
/// a shorter phrase can never corrupt a longer one during masking.
pub fn build_protect_set(phrases: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut protect: Vec<String> = Vec::new();

    for phrase in phrases {
        let trimmed = phrase.trim();
        if trimmed.is_empty() || !trimmed.chars().any(|c| c.is_alphabetic()) {
            continue;
        }
        if seen.insert(trimmed.to_string()) {
            protect.push(trimmed.to_string());
        }
    }

    protect.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    protect
}

/// Replace every case-insensitive occurrence of each protected phrase with a
/// fresh placeholder token. Phrase text is treated as a literal, so regex
/// metacharacters in brand names cannot be misinterpreted.
pub fn mask(sentence: &str, protect: &[String]) -> (String, MaskMapping) {
    let mut mapping: MaskMapping = Vec::new();
    let mut masked = sentence.to_string();
    let sentence_lower = sentence.to_lowercase();

    for (i, phrase) in protect.iter().enumerate() {
        if !sentence_lower.contains(&phrase.to_lowercase()) {
            continue;
        }
        let token = format!("<<<KEEP_{}>>>", i);
        let pattern = Regex::new(&format!("(?i){}", regex::escape(phrase)))
            .expect("escaped phrase is always a valid pattern");
        masked = pattern.replace_all(&masked, NoExpand(&token)).into_owned();
        mapping.push((token, phrase.clone()));
    }

    (masked, mapping)
}

/// Restore the original phrases. Preservation only holds for placeholders
/// the generator returned unmodified.
pub fn unmask(text: &str, mapping: &MaskMapping) -> String {
    let mut restored = text.to_string();
    for (token, phrase) in mapping {
        restored = restored.replace(token, phrase);
    }
    restored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protect(phrases: &[&str]) -> Vec<String> {
        build_protect_set(&phrases.iter().map(|p| p.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_mask_and_unmask_round_trip() {
        let set = protect(&["Acme Corp"]);
        let (masked, mapping) = mask("Acme Corp launched a product.", &set);
        assert!(!masked.contains("Acme Corp"));
        assert!(masked.contains("<<<KEEP_0>>>"));
        assert_eq!(unmask(&masked, &mapping), "Acme Corp launched a product.");
    }

    #[test]
    fn test_mask_is_case_insensitive_and_restores_original_casing() {
        let set = protect(&["Acme Corp"]);
        let (masked, mapping) = mask("acme corp and ACME CORP agreed.", &set);
        assert_eq!(masked, "<<<KEEP_0>>> and <<<KEEP_0>>> agreed.");
        assert_eq!(unmask(&masked, &mapping), "Acme Corp and Acme Corp agreed.");
    }

    #[test]
    fn test_longer_phrases_are_masked_first() {
        let set = protect(&["New", "New York"]);
        assert_eq!(set, vec!["New York", "New"]);

        let (masked, mapping) = mask("New York has new energy.", &set);
        // "New York" must be consumed whole before "New" gets a chance.
        assert!(masked.starts_with("<<<KEEP_0>>>"));
        assert_eq!(unmask(&masked, &mapping), "New York has New energy.");
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let set = protect(&["C++ (lang)?"]);
        let (masked, mapping) = mask("We love C++ (lang)? a lot.", &set);
        assert_eq!(masked, "We love <<<KEEP_0>>> a lot.");
        assert_eq!(unmask(&masked, &mapping), "We love C++ (lang)? a lot.");
    }

    #[test]
    fn test_substring_matches_are_masked_without_word_boundaries() {
        // Documented behavior: "Cat" also matches inside "Catalog".
        let set = protect(&["Cat"]);
        let (masked, _) = mask("The Catalog lists a Cat.", &set);
        assert_eq!(masked, "The <<<KEEP_0>>>alog lists a <<<KEEP_0>>>.");
    }

    #[test]
    fn test_absent_phrase_produces_no_mapping() {
        let set = protect(&["Globex"]);
        let (masked, mapping) = mask("Nothing to protect here.", &set);
        assert_eq!(masked, "Nothing to protect here.");
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_protect_set_filters_and_dedupes() {
        let set = protect(&["  ", "123", "Acme", "Acme", "!?"]);
        assert_eq!(set, vec!["Acme"]);
    }

    #[test]
    fn test_unmask_leaves_dropped_tokens_alone() {
        // A generator may mangle a token; unmask only touches exact matches.
        let mapping: MaskMapping = vec![("<<<KEEP_0>>>".to_string(), "Acme".to_string())];
        assert_eq!(unmask("broken <<KEEP_0>> token", &mapping), "broken <<KEEP_0>> token");
    }
}

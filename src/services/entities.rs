// Entity Extractor
// Proper-noun span detection used when lock_proper_nouns is set

use std::collections::HashSet;
use std::sync::LazyLock;

/// Capitalized words that open sentences or name dates rather than entities.
static NON_ENTITY_WORDS: &[&str] = &[
    "The", "A", "An", "This", "That", "These", "Those", "It", "He", "She", "They", "We", "You",
    "I", "If", "In", "On", "At", "For", "But", "And", "Or", "So", "As", "By", "To", "From",
    "With", "When", "While", "After", "Before", "Because", "However", "Although", "Since",
    "There", "Here", "What", "Who", "Why", "How", "Where", "Not", "No", "Yes", "Then", "Later",
    "Now", "Also", "Still", "Yet", "Meanwhile", "Finally", "First", "Next", "January",
    "February", "March", "April", "May", "June", "July", "August", "September", "October",
    "November", "December", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
    "Sunday",
];

static NON_ENTITY_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NON_ENTITY_WORDS.iter().copied().collect());

/// The named-entity capability consumed by the pipeline. Implementations
/// cover person / organization / product / geo-political surface forms; the
/// pipeline only needs the flattened strings.
pub trait EntityExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Vec<String>;
}

/// Shipped extractor: contiguous runs of capitalized tokens, with common
/// sentence openers and date words filtered out. Deliberately a surface-form
/// heuristic, not full NER.
pub struct ProperNounExtractor;

impl EntityExtractor for ProperNounExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_proper_nouns(text)
    }
}

pub fn extract_proper_nouns(text: &str) -> Vec<String> {
    let mut entities: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut run: Vec<String> = Vec::new();

    for raw in text.split_whitespace() {
        let token = trim_token(raw);
        if is_entity_token(token) {
            run.push(token.to_string());
        } else {
            flush_run(&mut run, &mut entities, &mut seen);
        }
        // Clause- and sentence-final tokens end the current run even when
        // the next token is capitalized.
        if raw.ends_with(['.', '!', '?', ';', ':', ',']) {
            flush_run(&mut run, &mut entities, &mut seen);
        }
    }
    flush_run(&mut run, &mut entities, &mut seen);

    entities
}

fn trim_token(raw: &str) -> &str {
    raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '&')
}

fn is_entity_token(token: &str) -> bool {
    if token.is_empty() || NON_ENTITY_SET.contains(token) {
        return false;
    }
    if !token.chars().any(|c| c.is_alphabetic()) {
        return false;
    }
    token.chars().next().is_some_and(|c| c.is_uppercase())
}

fn flush_run(run: &mut Vec<String>, entities: &mut Vec<String>, seen: &mut HashSet<String>) {
    if run.is_empty() {
        return;
    }
    let entity = run.join(" ");
    run.clear();
    if seen.insert(entity.clone()) {
        entities.push(entity);
    }
}

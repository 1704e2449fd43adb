// Postprocessor
// Final whitespace/punctuation normalization over the joined sentences

use std::sync::LazyLock;

use regex::Regex;

static WS_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid pattern"));
static WS_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([,.;:?!])").expect("valid pattern"));

/// Collapse whitespace runs, drop whitespace before closing punctuation and
/// trim the ends. Idempotent.
pub fn postprocess(text: &str) -> String {
    let collapsed = WS_RUN.replace_all(text, " ");
    let tightened = WS_BEFORE_PUNCT.replace_all(&collapsed, "$1");
    tightened.trim().to_string()
}

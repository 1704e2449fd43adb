// Discourse Injector
// Prepends tone-appropriate transition markers to long sentences

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Tone;

const INJECT_PROBABILITY: f64 = 0.2;
const MIN_MARKER_WORDS: usize = 14;

const NEUTRAL_MARKERS: [&str; 4] = ["Additionally", "In short", "Overall", "That said"];
const FRIENDLY_MARKERS: [&str; 4] = ["Plus", "Here's the thing", "All in all", "On that note"];
const CONFIDENT_MARKERS: [&str; 4] = ["Crucially", "In practice", "Net-net", "Bottom line"];

pub fn markers_for(tone: Tone) -> &'static [&'static str; 4] {
    match tone {
        Tone::Neutral => &NEUTRAL_MARKERS,
        Tone::Friendly => &FRIENDLY_MARKERS,
        Tone::Confident => &CONFIDENT_MARKERS,
    }
}

/// One pass over the post-rewrite sentence list. The first sentence is never
/// touched; any later sentence of at least 14 words gets a marker with
/// probability 0.2, whether or not it was rewritten.
pub fn inject_discourse_markers<R: Rng>(
    sentences: &[String],
    tone: Tone,
    rng: &mut R,
) -> Vec<String> {
    let markers = markers_for(tone);
    sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| {
            if i > 0
                && sentence.split_whitespace().count() >= MIN_MARKER_WORDS
                && rng.gen::<f64>() < INJECT_PROBABILITY
            {
                let marker = markers
                    .choose(&mut *rng)
                    .expect("marker lists are never empty");
                format!("{} — {}", marker, sentence)
            } else {
                sentence.clone()
            }
        })
        .collect()
}

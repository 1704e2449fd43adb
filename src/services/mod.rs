// Humanizer Core Services

pub mod discourse;
pub mod entities;
pub mod generator;
pub mod masker;
pub mod pipeline;
pub mod postprocess;
pub mod readability;
pub mod segmenter;

pub use discourse::{inject_discourse_markers, markers_for};
pub use entities::{EntityExtractor, ProperNounExtractor};
pub use generator::{
    build_prompt, tone_instruction, GenerateError, HttpParaphraseClient, ParaphraseGenerator,
    SamplingParams,
};
pub use masker::{build_protect_set, mask, unmask, MaskMapping};
pub use pipeline::{HumanizeError, Humanizer};
pub use postprocess::postprocess;
pub use readability::flesch_reading_ease;
pub use segmenter::{RuleSegmenter, SegmentError, SentenceSegmenter};

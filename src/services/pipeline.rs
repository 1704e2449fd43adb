// Humanize Pipeline
// Orchestrates segmentation, masking, generation, discourse injection and
// readability scoring for one request

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{HumanizeRequest, HumanizeResponse, Tone};
use crate::services::discourse::inject_discourse_markers;
use crate::services::entities::{EntityExtractor, ProperNounExtractor};
use crate::services::generator::{build_prompt, GenerateError, ParaphraseGenerator, SamplingParams};
use crate::services::masker::{build_protect_set, mask, unmask};
use crate::services::postprocess::postprocess;
use crate::services::readability::flesch_reading_ease;
use crate::services::segmenter::{RuleSegmenter, SegmentError, SentenceSegmenter};

/// Sentences at or below this word count are never rewritten.
const MIN_REWRITE_WORDS: usize = 4;

#[derive(Debug, Error)]
pub enum HumanizeError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("sentence segmentation failed: {0}")]
    Segmentation(#[from] SegmentError),
}

/// Request-scoped humanization pipeline. The generator is the only
/// compute-heavy collaborator; segmentation and entity extraction are
/// injected behind their capability traits so tests can replace them.
pub struct Humanizer<G> {
    generator: G,
    segmenter: Box<dyn SentenceSegmenter>,
    extractor: Box<dyn EntityExtractor>,
}

impl<G: ParaphraseGenerator> Humanizer<G> {
    pub fn new(generator: G) -> Self {
        Self::with_parts(generator, Box::new(RuleSegmenter), Box::new(ProperNounExtractor))
    }

    pub fn with_parts(
        generator: G,
        segmenter: Box<dyn SentenceSegmenter>,
        extractor: Box<dyn EntityExtractor>,
    ) -> Self {
        Self {
            generator,
            segmenter,
            extractor,
        }
    }

    /// Run the full pipeline. Only validation and segmentation failures are
    /// surfaced; per-sentence generation failures and scoring failures are
    /// absorbed so a well-formed request always gets a best-effort result.
    pub async fn humanize(&self, req: &HumanizeRequest) -> Result<HumanizeResponse, HumanizeError> {
        req.validate().map_err(HumanizeError::InvalidRequest)?;

        let sentences = self.segmenter.segment(&req.text)?;
        let total_sentences = sentences.len();

        let mut protect_sources: Vec<String> = req.preserve.clone();
        if req.lock_proper_nouns {
            protect_sources.extend(self.extractor.extract(&req.text));
        }
        let protect = build_protect_set(&protect_sources);

        let readability_before = flesch_reading_ease(&req.text);

        // One RNG per call: interleaved requests cannot corrupt each other's
        // seeded reproducibility.
        let mut rng = match req.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let params = SamplingParams::from_creativity(req.creativity, req.max_tokens, req.seed);

        let mut changed_sentences = 0;
        let mut out_sentences: Vec<String> = Vec::with_capacity(total_sentences);

        for sentence in &sentences {
            let roll: f64 = rng.gen();
            let eligible = sentence.split_whitespace().count() > MIN_REWRITE_WORDS;

            if roll < req.change_ratio && eligible {
                match self.rewrite_sentence(sentence, req.tone, &params, &protect).await {
                    Ok(Some(rewritten)) => {
                        changed_sentences += 1;
                        out_sentences.push(rewritten);
                        continue;
                    }
                    Ok(None) => {
                        debug!("generation produced a no-op; keeping original sentence");
                    }
                    Err(err) => {
                        warn!(%err, "sentence rewrite failed; keeping original");
                    }
                }
            }
            out_sentences.push(sentence.clone());
        }

        let out_sentences = inject_discourse_markers(&out_sentences, req.tone, &mut rng);
        let output_text = postprocess(&out_sentences.join(" "));
        let readability_after = flesch_reading_ease(&output_text);

        Ok(HumanizeResponse {
            output_text,
            changed_sentences,
            total_sentences,
            readability_before,
            readability_after,
        })
    }

    /// One rewrite attempt: mask, generate, unmask. Returns Ok(None) for
    /// no-op results (empty output or unchanged text).
    async fn rewrite_sentence(
        &self,
        sentence: &str,
        tone: Tone,
        params: &SamplingParams,
        protect: &[String],
    ) -> Result<Option<String>, GenerateError> {
        let (masked, mapping) = mask(sentence, protect);
        let prompt = build_prompt(tone, &masked);
        let generated = self.generator.generate(&prompt, params).await?;
        let restored = unmask(&generated, &mapping);

        let trimmed = restored.trim();
        if trimmed.is_empty() || trimmed == sentence.trim() {
            return Ok(None);
        }
        Ok(Some(trimmed.to_string()))
    }
}

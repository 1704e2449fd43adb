// Humanizer Data Models
// Request/response schemas for the humanize endpoint

use serde::{Deserialize, Serialize};

/// Writing tone steering both the paraphrase instruction and the
/// discourse-marker vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Neutral,
    Friendly,
    Confident,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HumanizeRequest {
    pub text: String,
    /// Phrases that must survive the rewrite verbatim (brand names, terms).
    #[serde(default)]
    pub preserve: Vec<String>,
    #[serde(default)]
    pub tone: Tone,
    /// 0..1 dial mapped to sampling temperature / nucleus threshold.
    #[serde(default = "default_creativity")]
    pub creativity: f64,
    /// Per-sentence probability that a rewrite is attempted.
    #[serde(default = "default_change_ratio")]
    pub change_ratio: f64,
    /// Generation budget per sentence, in new tokens.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Also protect named entities detected in the input.
    #[serde(default)]
    pub lock_proper_nouns: bool,
    /// Reseeds all randomness in the call for reproducible output.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl HumanizeRequest {
    /// Schema/range validation, applied before the pipeline runs.
    pub fn validate(&self) -> Result<(), String> {
        if self.text.trim().is_empty() {
            return Err("text must not be empty".to_string());
        }
        if !(0.0..=1.0).contains(&self.creativity) {
            return Err(format!(
                "creativity must be within 0..1, got {}",
                self.creativity
            ));
        }
        if !(0.0..=1.0).contains(&self.change_ratio) {
            return Err(format!(
                "change_ratio must be within 0..1, got {}",
                self.change_ratio
            ));
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than zero".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HumanizeResponse {
    pub output_text: String,
    pub changed_sentences: usize,
    pub total_sentences: usize,
    pub readability_before: f64,
    pub readability_after: f64,
}

// ============ Default Value Functions ============

fn default_creativity() -> f64 {
    0.5
}
fn default_change_ratio() -> f64 {
    0.5
}
fn default_max_tokens() -> u32 {
    64
}

// Paraphrase Generator
// Maps tone/creativity into sampling parameters and calls the remote
// paraphrase inference service

use std::env;
use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Tone;

const PARAPHRASE_DEFAULT_URL: &str = "http://127.0.0.1:8501/generate";
const GENERATE_TIMEOUT_SECS: u64 = 60;

/// Tokenizer control tokens the inference backend may leak into decoded text.
const CONTROL_TOKENS: &[&str] = &["<pad>", "</s>", "<s>", "<unk>"];

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("inference API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("missing text in inference response")]
    MissingText,
}

/// Sampling parameters for one generation call. Creativity never drives the
/// call into greedy decoding; sampling is always on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplingParams {
    pub temperature: f64,
    pub top_p: f64,
    pub repetition_penalty: f64,
    pub max_new_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SamplingParams {
    pub fn from_creativity(creativity: f64, max_tokens: u32, seed: Option<u64>) -> Self {
        Self {
            temperature: (0.5 + 0.5 * creativity).max(0.3),
            top_p: (0.8 + 0.15 * creativity).clamp(0.5, 0.95),
            repetition_penalty: 1.15,
            max_new_tokens: max_tokens,
            seed,
        }
    }
}

pub fn tone_instruction(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => "Paraphrase in clear, natural English.",
        Tone::Friendly => "Paraphrase in warm, conversational English.",
        Tone::Confident => "Paraphrase in concise, assertive business English.",
    }
}

/// Single prompt handed to the generator: tone instruction plus the masked
/// sentence.
pub fn build_prompt(tone: Tone, masked_sentence: &str) -> String {
    format!(
        "{}\n\nSentence: {}\nRewritten:",
        tone_instruction(tone),
        masked_sentence
    )
}

/// The paraphrase capability consumed by the pipeline. One call produces one
/// sampled continuation.
pub trait ParaphraseGenerator: Send + Sync {
    fn generate(
        &self,
        prompt: &str,
        params: &SamplingParams,
    ) -> impl Future<Output = Result<String, GenerateError>> + Send;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    do_sample: bool,
    num_return_sequences: u32,
    #[serde(flatten)]
    params: &'a SamplingParams,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    text: Option<String>,
}

/// Client for a remote paraphrase inference endpoint. The remote server owns
/// the model weights and their reentrancy policy; this process never loads a
/// model.
pub struct HttpParaphraseClient {
    client: Client,
    url: String,
}

impl Default for HttpParaphraseClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpParaphraseClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(GENERATE_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        let url =
            env::var("HUMANIZER_GENERATE_URL").unwrap_or_else(|_| PARAPHRASE_DEFAULT_URL.to_string());
        Self { client, url }
    }
}

impl ParaphraseGenerator for HttpParaphraseClient {
    async fn generate(&self, prompt: &str, params: &SamplingParams) -> Result<String, GenerateError> {
        let request = GenerateRequest {
            prompt,
            do_sample: true,
            num_return_sequences: 1,
            params,
        };

        let response = self.client.post(&self.url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let data: GenerateResponse = response.json().await?;
        let text = data.text.ok_or(GenerateError::MissingText)?;
        Ok(strip_control_tokens(&text))
    }
}

pub fn strip_control_tokens(text: &str) -> String {
    let mut cleaned = text.to_string();
    for token in CONTROL_TOKENS {
        cleaned = cleaned.replace(token, "");
    }
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_creativity_maps_to_base_sampling() {
        let params = SamplingParams::from_creativity(0.0, 64, None);
        assert!((params.temperature - 0.5).abs() < 1e-9);
        assert!((params.top_p - 0.8).abs() < 1e-9);
        assert!((params.repetition_penalty - 1.15).abs() < 1e-9);
        assert_eq!(params.max_new_tokens, 64);
    }

    #[test]
    fn test_full_creativity_hits_upper_bounds() {
        let params = SamplingParams::from_creativity(1.0, 128, Some(7));
        assert!((params.temperature - 1.0).abs() < 1e-9);
        assert!((params.top_p - 0.95).abs() < 1e-9);
        assert_eq!(params.seed, Some(7));
    }

    #[test]
    fn test_temperature_floor_holds() {
        // Even nonsense negative creativity cannot drop below the floor.
        let params = SamplingParams::from_creativity(-1.0, 16, None);
        assert!((params.temperature - 0.3).abs() < 1e-9);
        assert!((params.top_p - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_prompt_carries_tone_instruction_and_sentence() {
        let prompt = build_prompt(Tone::Confident, "the masked <<<KEEP_0>>> sentence");
        assert!(prompt.starts_with("Paraphrase in concise, assertive business English."));
        assert!(prompt.contains("Sentence: the masked <<<KEEP_0>>> sentence"));
        assert!(prompt.ends_with("Rewritten:"));
    }

    #[test]
    fn test_control_tokens_are_stripped() {
        let decoded = "<pad> A clean rewrite.</s>";
        assert_eq!(strip_control_tokens(decoded), "A clean rewrite.");
    }

    #[test]
    fn test_seed_is_omitted_from_wire_when_absent() {
        let params = SamplingParams::from_creativity(0.5, 32, None);
        let json = serde_json::to_value(&params).unwrap();
        assert!(json.get("seed").is_none());
        assert!(json.get("temperature").is_some());
    }
}

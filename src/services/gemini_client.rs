use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value as JsonValue};

pub const DEFAULT_TOP_P: f32 = 0.95;
pub const DEFAULT_TOP_K: u32 = 40;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 4096;

pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Sampling settings for one generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl SamplingParams {
    pub fn with_temperature(temperature: f32) -> Self {
        Self {
            temperature,
            top_p: DEFAULT_TOP_P,
            top_k: DEFAULT_TOP_K,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

/// External text-generation service. Implementations hold no per-request
/// state and are shared across concurrent requests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the raw text produced for `prompt`.
    async fn generate(&self, prompt: &str, params: &SamplingParams) -> Result<String>;
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, client: Client) -> Self {
        Self {
            client,
            api_key,
            model,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// The key travels in `API_KEY_HEADER`, never in the URL.
    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn request_body(prompt: &str, params: &SamplingParams) -> JsonValue {
        json!({
            "contents": [
                { "role": "user", "parts": [{ "text": prompt }] }
            ],
            "generationConfig": {
                "temperature": params.temperature,
                "topP": params.top_p,
                "topK": params.top_k,
                "maxOutputTokens": params.max_output_tokens,
            }
        })
    }

    /// Concatenates the text parts of the first candidate.
    fn response_text(body: &JsonValue) -> Option<String> {
        let parts = body
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.as_array())?;

        let text: String = parts
            .iter()
            .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
            .collect();

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, params: &SamplingParams) -> Result<String> {
        let res = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&Self::request_body(prompt, params))
            .send()
            .await
            .map_err(|e| {
                Error::ExternalService(format!("Gemini request failed: {}", e.without_url()))
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(Error::ExternalService(format!(
                "Gemini API error {}: {}",
                status, text
            )));
        }

        let body: JsonValue = res
            .json()
            .await
            .map_err(|e| {
                Error::ExternalService(format!(
                    "Invalid Gemini response body: {}",
                    e.without_url()
                ))
            })?;

        Self::response_text(&body).ok_or_else(|| {
            let reason = body["candidates"][0]["finishReason"]
                .as_str()
                .or_else(|| body["promptFeedback"]["blockReason"].as_str())
                .unwrap_or("no candidates");
            Error::ExternalService(format!("Gemini returned no text ({})", reason))
        })
    }
}

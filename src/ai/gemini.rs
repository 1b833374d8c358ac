use anyhow::{anyhow, Context};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::prompts::Prompt;
use crate::config::GeminiConfig;

// Sent as a header rather than `?key=` so it never shows up in a URL.
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Client for Gemini's `generateContent` endpoint.  One call per request,
/// bounded by the configured timeout and never retried.
pub struct Gemini {
    client: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl Gemini {
    pub fn new(config: &GeminiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .with_context(|| "Failed to build gemini http client")?;

        let endpoint = format!(
            "{}/{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.api_version,
            config.model
        );

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            endpoint,
        })
    }

    pub async fn execute<P: Prompt>(&self, prompt: P) -> anyhow::Result<P::Response> {
        let raw_response = self.call_model(prompt.build_payload()).await?;
        prompt.parse_response(&raw_response)
    }

    // Calls the model, gets the generated text of the first candidate back.
    pub async fn call_model(&self, payload: GenerateContentRequest) -> anyhow::Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("GEMINI_API_KEY is not configured"))?;

        info!("calling {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| e.without_url())
            .with_context(|| "Failed to call gemini generateContent endpoint")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| e.without_url())
            .with_context(|| "Failed to read gemini response body")?;

        if status != StatusCode::OK {
            return Err(anyhow!("Error calling gemini ({status}): {body}"));
        }

        parse_generated_text(&body)
    }
}

/// Pulls `candidates[0].content.parts[0].text` out of a response envelope.
pub fn parse_generated_text(body: &str) -> anyhow::Result<String> {
    let parsed: GenerateContentResponse =
        serde_json::from_str(body).with_context(|| "Failed to parse gemini response envelope")?;

    let candidate = parsed
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("no candidates in response"))?;

    let content = match candidate.content {
        Some(content) => content,
        None => return Err(anyhow!("no content in candidate")),
    };

    match content.parts.into_iter().next().and_then(|part| part.text) {
        Some(text) => Ok(text),
        None => Err(anyhow!("no text in content")),
    }
}

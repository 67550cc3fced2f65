//! Generative-AI client abstraction
//!
//! Provides a unified interface over the hosted text-generation
//! capability. The production implementation talks to the Google
//! Gemini REST API; a mock is available for tests and keyless local
//! runs.
//!
//! Failures from the provider (timeout, auth, quota, malformed
//! response) all surface as a single AI-invocation error carrying the
//! underlying message. The call is made exactly once per request.

use crate::config::GeminiConfig;
use crate::errors::{AppError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Trait for text generation
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate a completion for a single prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the model name
    fn model_name(&self) -> &str;
}

/// Google Gemini client
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Concatenated text of the first candidate, if any
fn response_text(response: GenerateContentResponse) -> Option<String> {
    let text = response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .map(|p| p.text)
        .collect::<String>();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

impl GeminiClient {
    /// Create a new Gemini client from configuration
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(config::ConfigError::Message(format!(
                "Failed to build HTTP client: {}",
                e
            ))))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.api_base.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::AiInvocation {
                message: format!("Request failed: {}", e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::AiInvocation {
                message: format!("API error {}: {}", status, body),
            });
        }

        let parsed: GenerateContentResponse =
            response.json().await.map_err(|e| AppError::AiInvocation {
                message: format!("Failed to parse response: {}", e),
            })?;

        response_text(parsed).ok_or_else(|| AppError::AiInvocation {
            message: "Empty response from model".to_string(),
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Mock generator for testing and keyless local runs
pub struct MockGenerator {
    reply: String,
}

impl MockGenerator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new("mock analysis response")
    }
}

#[async_trait]
impl Generator for MockGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(self.reply.clone())
    }

    fn model_name(&self) -> &str {
        "mock-generator"
    }
}

/// Create a generator based on configuration.
///
/// An api_key of "mock" selects the in-process mock.
pub fn create_generator(config: &GeminiConfig) -> Result<Arc<dyn Generator>> {
    if config.api_key == "mock" {
        tracing::warn!("Using mock generator; set gemini.api_key for real analysis");
        Ok(Arc::new(MockGenerator::default()))
    } else {
        Ok(Arc::new(GeminiClient::new(config)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_response_text_extraction() {
        let response = parse(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Summary: "}, {"text": "fine."}]
                },
                "finishReason": "STOP"
            }]
        }));
        assert_eq!(response_text(response).as_deref(), Some("Summary: fine."));
    }

    #[test]
    fn test_response_text_empty_candidates() {
        let response = parse(json!({ "candidates": [] }));
        assert!(response_text(response).is_none());
    }

    #[test]
    fn test_response_text_missing_content() {
        let response = parse(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        }));
        assert!(response_text(response).is_none());
    }

    #[tokio::test]
    async fn test_mock_generator() {
        let generator = MockGenerator::new("canned");
        let reply = generator.generate("anything").await.unwrap();
        assert_eq!(reply, "canned");
        assert_eq!(generator.model_name(), "mock-generator");
    }
}

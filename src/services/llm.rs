use crate::core::similarity::{SimilarityError, SimilarityProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the language model
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl From<LlmError> for SimilarityError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::InvalidResponse(msg) => SimilarityError::InvalidResponse(msg),
            other => SimilarityError::Unavailable(other.to_string()),
        }
    }
}

/// OpenAI-compatible chat completions client
///
/// Used as the remote similarity provider: one request per comparison,
/// temperature 0, a single numeric answer expected back.
pub struct LlmClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl LlmClient {
    /// Create a new client
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            model,
            client,
        })
    }

    /// Prompt asking for a single similarity number
    pub fn comparison_prompt(skill: &str, task: &str) -> String {
        format!(
            "On a scale from 0 to 1, how similar is the volunteer skill \"{}\" \
             to the requested task \"{}\"? Reply with only the number.",
            skill, task
        )
    }

    /// Ask the model to rate the similarity of two descriptions
    pub async fn rate_similarity(&self, skill: &str, task: &str) -> Result<f64, LlmError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let payload = json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": Self::comparison_prompt(skill, task) }
            ],
            "temperature": 0,
            "max_tokens": 5,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(LlmError::Unauthorized);
        }
        if !status.is_success() {
            return Err(LlmError::ApiError(format!("Similarity request failed: {}", status)));
        }

        let json: Value = response.json().await?;

        let content = json
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| LlmError::InvalidResponse("Missing choices[0].message.content".into()))?;

        parse_score(content)
    }
}

/// Parse the leading number of the model's reply
///
/// Trailing text after the number is ignored, so `"0.8."` and
/// `"0.8 (high)"` both read as 0.8. A reply that does not start with a
/// number is rejected.
fn parse_score(content: &str) -> Result<f64, LlmError> {
    let trimmed = content.trim();
    let end = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    let number = trimmed[..end].trim_end_matches('.');

    number
        .parse::<f64>()
        .map_err(|_| LlmError::InvalidResponse(format!("Not a number: {:?}", content)))
}

#[async_trait]
impl SimilarityProvider for LlmClient {
    async fn similarity(&self, skill: &str, task: &str) -> Result<f64, SimilarityError> {
        Ok(self.rate_similarity(skill, task).await?)
    }

    fn name(&self) -> &'static str {
        "llm"
    }
}

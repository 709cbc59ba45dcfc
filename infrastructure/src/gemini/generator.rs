//! Gemini implementation of the [`TextGenerator`] port

use super::error::{GeminiError, Result};
use super::protocol::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use crate::config::ApiKey;
use async_trait::async_trait;
use newsdesk_application::{GatewayError, TextGenerator};
use newsdesk_domain::Model;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// Public Generative Language API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Connection settings for [`GeminiTextGenerator`]
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

/// Calls `models/{model}:generateContent` once per prompt
pub struct GeminiTextGenerator {
    client: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl GeminiTextGenerator {
    pub fn new(api_key: ApiKey, settings: &GeminiSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("newsdesk/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn endpoint(&self, model: &Model) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            model.as_str()
        )
    }

    async fn generate_content(&self, model: &Model, prompt: &str) -> Result<String> {
        let url = self.endpoint(model);
        debug!(model = %model, prompt_bytes = prompt.len(), "Calling generateContent");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        parsed.text().ok_or_else(|| GeminiError::EmptyResponse {
            model: model.to_string(),
            finish_reason: parsed.finish_reason(),
        })
    }
}

/// Build an error from a non-success response, preferring the API's message.
fn api_error(status: StatusCode, body: &str) -> GeminiError {
    let message = match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.describe(),
        Err(_) => body.trim().to_string(),
    };
    GeminiError::Api {
        code: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        message,
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    async fn generate(
        &self,
        model: &Model,
        prompt: &str,
    ) -> std::result::Result<String, GatewayError> {
        self.generate_content(model, prompt)
            .await
            .map_err(GatewayError::from)
    }
}

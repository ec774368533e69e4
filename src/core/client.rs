//! Upstream Gemini client.
//!
//! One shared `reqwest::Client` POSTs `generateContent` payloads and pulls
//! the first candidate's text out of the response. The API key travels in
//! the `x-goog-api-key` header so request URLs stay loggable.

use advisory_protocol::generate::{GenerateContentRequest, GenerateContentResponse};
use serde_json::Value;

use super::error::{GatewayError, GatewayResult};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl GeminiClient {
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        api_key: &str,
        model: &str,
        temperature: f32,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            temperature,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Text-only invocation. Returns the model's trimmed text.
    pub async fn generate_text(&self, prompt: &str) -> GatewayResult<String> {
        self.invoke(GenerateContentRequest::from_text(prompt).temperature(self.temperature))
            .await
    }

    /// Text plus one inline base64 image.
    pub async fn generate_with_image(
        &self,
        prompt: &str,
        mime_type: &str,
        data: &str,
    ) -> GatewayResult<String> {
        self.invoke(
            GenerateContentRequest::with_inline_image(prompt, mime_type, data)
                .temperature(self.temperature),
        )
        .await
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    async fn invoke(&self, request: GenerateContentRequest) -> GatewayResult<String> {
        let response = self
            .http
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::UpstreamStatus {
                status: status.as_u16(),
                message: upstream_error_message(&body),
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        if let Some(reason) = parsed.block_reason() {
            return Err(GatewayError::Blocked {
                reason: reason.to_string(),
            });
        }
        parsed.primary_text().ok_or(GatewayError::EmptyCompletion)
    }
}

/// Pull the human-readable message out of an upstream error body.
/// Non-JSON bodies pass through trimmed.
fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

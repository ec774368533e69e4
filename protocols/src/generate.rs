// Gemini generateContent API types
// https://ai.google.dev/api/generate-content

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

// ============================================================================
// Request types
// ============================================================================

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,

    #[serde(rename = "generationConfig")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Single-turn, text-only request.
    pub fn from_text(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::user(vec![Part::text(prompt)])],
            generation_config: None,
        }
    }

    /// Single-turn request carrying a prompt and one inline image.
    pub fn with_inline_image(
        prompt: impl Into<String>,
        mime_type: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            contents: vec![Content::user(vec![
                Part::text(prompt),
                Part::inline_image(mime_type, data),
            ])],
            generation_config: None,
        }
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.generation_config
            .get_or_insert_with(GenerationConfig::default)
            .temperature = Some(temperature);
        self
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts,
        }
    }
}

/// A single content part. The API distinguishes parts by which key is
/// present, hence the untagged representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: Blob },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn inline_image(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Part::InlineData {
            inline_data: Blob {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }
}

/// Base64-encoded media payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blob {
    pub mime_type: String,
    pub data: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub temperature: Option<f32>,

    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: Option<u32>,
}

// ============================================================================
// Response types
// ============================================================================

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    #[serde(rename = "promptFeedback")]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,

    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptFeedback {
    #[serde(rename = "blockReason")]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, trimmed.
    /// `None` when the response carries no usable text.
    pub fn primary_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let mut out = String::new();
        for part in &content.parts {
            if let Part::Text { text } = part {
                out.push_str(text);
            }
        }
        let trimmed = out.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Block reason reported by safety filtering, if any.
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
    }
}

//! Wire types for the OpenAI chat-completions API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct OpenAiRequest {
    pub model: String,
    pub messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// One chat message with multimodal content parts.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct OpenAiMessage {
    pub role: &'static str,
    pub content: Vec<OpenAiContentPart>,
}

/// One content part of a chat message.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub(crate) enum OpenAiContentPart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: OpenAiImageUrl },
}

/// Image reference: a plain URL or a `data:` URL.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct OpenAiImageUrl {
    pub url: String,
}

/// Response body, reduced to the fields the driver consumes.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OpenAiResponse {
    pub choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OpenAiChoice {
    pub message: OpenAiChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OpenAiChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

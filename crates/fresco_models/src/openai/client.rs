use super::{OpenAiContentPart, OpenAiImageUrl, OpenAiMessage, OpenAiRequest, OpenAiResponse};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use fresco_core::{GenerateRequest, GenerateResponse, Input, MediaSource, Output, Role};
use fresco_error::{ModelError, ModelErrorKind};
use fresco_interface::VisionDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o";
const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// OpenAI API client for vision-capable chat completions.
#[derive(Debug, Clone)]
pub struct OpenAiVisionClient {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiVisionClient {
    /// Creates a new OpenAI client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenAI API key
    /// * `model` - Model identifier (e.g., "gpt-4o")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        debug!("Creating new OpenAI vision client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Creates a client from the `OPENAI_API_KEY` environment variable,
    /// targeting the default vision model.
    pub fn from_env() -> Result<Self, ModelError> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| ModelError::new(ModelErrorKind::MissingApiKey(API_KEY_VAR.to_string())))?;
        Ok(Self::new(api_key, DEFAULT_MODEL))
    }

    /// Converts a generic request into the OpenAI wire shape.
    fn convert_request(&self, request: &GenerateRequest) -> OpenAiRequest {
        let messages = request
            .messages
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::System => "system",
                    Role::User => "user",
                    Role::Assistant => "assistant",
                };
                let content = msg
                    .content
                    .iter()
                    .map(|input| match input {
                        Input::Text(text) => OpenAiContentPart::Text { text: text.clone() },
                        Input::Image { mime, source } => OpenAiContentPart::ImageUrl {
                            image_url: OpenAiImageUrl {
                                url: image_to_url(mime.as_deref(), source),
                            },
                        },
                    })
                    .collect();
                OpenAiMessage { role, content }
            })
            .collect();

        OpenAiRequest {
            model: request.model.clone().unwrap_or_else(|| self.model.clone()),
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

/// Images travel inline as `data:` URLs unless the caller already has a
/// hosted URL.
fn image_to_url(mime: Option<&str>, source: &MediaSource) -> String {
    let mime = mime.unwrap_or("image/jpeg");
    match source {
        MediaSource::Url(url) => url.clone(),
        MediaSource::Base64(encoded) => format!("data:{mime};base64,{encoded}"),
        MediaSource::Binary(bytes) => {
            format!("data:{mime};base64,{}", BASE64.encode(bytes))
        }
    }
}

#[async_trait]
impl VisionDriver for OpenAiVisionClient {
    #[instrument(skip(self, req), fields(model = %self.model))]
    async fn generate(&self, req: &GenerateRequest) -> Result<GenerateResponse, ModelError> {
        debug!("Sending request to OpenAI API");
        let body = self.convert_request(req);

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to OpenAI API");
                ModelError::new(ModelErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, body = %message, "OpenAI API returned error");
            return Err(ModelError::new(ModelErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let parsed: OpenAiResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse OpenAI response");
            ModelError::new(ModelErrorKind::Parse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ModelError::new(ModelErrorKind::EmptyResponse))?;

        debug!(chars = content.len(), "Received response from OpenAI");
        Ok(GenerateResponse {
            outputs: vec![Output::Text(content)],
        })
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

//! Wire types for the Leonardo REST API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /generations`.
///
/// Dimensions and model id match the production preset: one 1472x832
/// cinematic frame per scene, prompt enhancement disabled so the resolved
/// prompt is authoritative.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct LeonardoGenerationRequest {
    pub height: u32,
    pub width: u32,
    #[serde(rename = "modelId")]
    pub model_id: String,
    pub prompt: String,
    pub num_images: u32,
    #[serde(rename = "styleUUID")]
    pub style_uuid: String,
    #[serde(rename = "enhancePrompt")]
    pub enhance_prompt: bool,
}

/// Response body for a submission.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LeonardoJobResponse {
    #[serde(rename = "sdGenerationJob")]
    pub job: Option<LeonardoJob>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LeonardoJob {
    #[serde(rename = "generationId")]
    pub generation_id: String,
}

/// Response body for `GET /generations/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LeonardoPollResponse {
    pub generations_by_pk: Option<LeonardoGeneration>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LeonardoGeneration {
    pub status: String,
    #[serde(default)]
    pub generated_images: Vec<LeonardoImage>,
    #[serde(rename = "failureReason", default)]
    pub failure_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LeonardoImage {
    pub url: String,
}

use super::{LeonardoGenerationRequest, LeonardoJobResponse, LeonardoPollResponse};
use async_trait::async_trait;
use fresco_core::AssetKind;
use fresco_error::{ConfigError, ConfigErrorKind, GenerationError, GenerationErrorKind};
use fresco_interface::{GenerationBackend, GenerationRequest, JobPoll, JobStatus};
use reqwest::Client;
use tracing::{debug, error, instrument, warn};

const LEONARDO_API_URL: &str = "https://cloud.leonardo.ai/api/rest/v1";
const API_KEY_VAR: &str = "LEONARDO_API_KEY";

/// Production generation preset: one wide cinematic frame per scene.
const DEFAULT_MODEL_ID: &str = "b2614463-296c-462a-9586-aafdb8f00e36";
const IMAGE_WIDTH: u32 = 1472;
const IMAGE_HEIGHT: u32 = 832;

/// Leonardo API client implementing the submit/poll generation contract.
#[derive(Debug, Clone)]
pub struct LeonardoClient {
    client: Client,
    api_key: String,
    model_id: String,
}

impl LeonardoClient {
    /// Creates a new Leonardo client against the default generation model.
    pub fn new(api_key: impl Into<String>) -> Self {
        debug!("Creating new Leonardo client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model_id: DEFAULT_MODEL_ID.to_string(),
        }
    }

    /// Creates a client from the `LEONARDO_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| ConfigError::new(ConfigErrorKind::MissingEnv(API_KEY_VAR.to_string())))?;
        Ok(Self::new(api_key))
    }

    /// Override the generation model id.
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }
}

#[async_trait]
impl GenerationBackend for LeonardoClient {
    fn kind(&self) -> AssetKind {
        AssetKind::Image
    }

    #[instrument(skip(self, request), fields(character = %request.character))]
    async fn submit(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        debug!("Submitting generation job to Leonardo");
        let body = LeonardoGenerationRequest {
            height: IMAGE_HEIGHT,
            width: IMAGE_WIDTH,
            model_id: self.model_id.clone(),
            prompt: request.prompt.clone(),
            num_images: 1,
            style_uuid: request.style_id.clone(),
            enhance_prompt: false,
        };

        let response = self
            .client
            .post(format!("{LEONARDO_API_URL}/generations"))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send generation job to Leonardo");
                GenerationError::new(GenerationErrorKind::SubmissionRejected(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, body = %message, "Leonardo rejected the generation job");
            return Err(GenerationError::new(
                GenerationErrorKind::SubmissionRejected(format!("{status}: {message}")),
            ));
        }

        let parsed: LeonardoJobResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Leonardo submission response");
            GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
                "Failed to parse submission response: {}",
                e
            )))
        })?;

        let job_id = parsed
            .job
            .map(|job| job.generation_id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                GenerationError::new(GenerationErrorKind::MalformedResponse(
                    "Submission response carried no generation id".to_string(),
                ))
            })?;

        debug!(job_id = %job_id, "Leonardo accepted generation job");
        Ok(job_id)
    }

    #[instrument(skip(self))]
    async fn poll(&self, job_id: &str) -> Result<JobPoll, GenerationError> {
        let response = self
            .client
            .get(format!("{LEONARDO_API_URL}/generations/{job_id}"))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to poll Leonardo generation job");
                GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
                    "Poll request failed: {}",
                    e
                )))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, body = %message, "Leonardo poll returned error");
            return Err(GenerationError::new(
                GenerationErrorKind::MalformedResponse(format!("{status}: {message}")),
            ));
        }

        let parsed: LeonardoPollResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Leonardo poll response");
            GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
                "Failed to parse poll response: {}",
                e
            )))
        })?;

        let Some(generation) = parsed.generations_by_pk else {
            return Err(GenerationError::new(
                GenerationErrorKind::MalformedResponse(
                    "Poll response carried no generation record".to_string(),
                ),
            ));
        };

        let poll = map_generation(generation);
        debug!(status = ?poll.status, "Polled Leonardo generation job");
        Ok(poll)
    }
}

/// Map a provider generation record to a poll observation. Unrecognized
/// statuses are preserved rather than treated as failures.
fn map_generation(generation: super::types::LeonardoGeneration) -> JobPoll {
    match generation.status.as_str() {
        "PENDING" => JobPoll {
            status: JobStatus::Pending,
            asset_url: None,
            failure_reason: None,
        },
        "RUNNING" => JobPoll::running(),
        "COMPLETE" => JobPoll {
            status: JobStatus::Complete,
            asset_url: generation.generated_images.first().map(|i| i.url.clone()),
            failure_reason: None,
        },
        "FAILED" => JobPoll {
            status: JobStatus::Failed,
            asset_url: None,
            failure_reason: generation.failure_reason,
        },
        other => {
            warn!(status = %other, "Leonardo reported an unrecognized job status");
            JobPoll {
                status: JobStatus::Unknown(other.to_string()),
                asset_url: None,
                failure_reason: None,
            }
        }
    }
}

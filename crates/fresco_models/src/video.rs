//! Placeholder video backend.

use async_trait::async_trait;
use fresco_core::AssetKind;
use fresco_error::{GenerationError, GenerationErrorKind};
use fresco_interface::{GenerationBackend, GenerationRequest, JobPoll};
use tracing::warn;

/// The video slot of the generation pipeline.
///
/// Scene records reserve a video URL slot and the orchestrator can address
/// it, but no provider is wired yet: every submission is rejected with a
/// clear reason. Swapping this for a real client changes no orchestrator
/// code.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubVideoBackend;

impl StubVideoBackend {
    /// Creates the stub backend.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GenerationBackend for StubVideoBackend {
    fn kind(&self) -> AssetKind {
        AssetKind::Video
    }

    async fn submit(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        warn!(character = %request.character, "Video generation requested but no backend is configured");
        Err(GenerationError::new(
            GenerationErrorKind::SubmissionRejected(
                "video generation is not yet available".to_string(),
            ),
        ))
    }

    async fn poll(&self, job_id: &str) -> Result<JobPoll, GenerationError> {
        // Submission never succeeds, so no job id can be valid.
        Err(GenerationError::new(
            GenerationErrorKind::MalformedResponse(format!("no such video job: {job_id}")),
        ))
    }
}

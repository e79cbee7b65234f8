//! Scene asset orchestration over submit/poll generation backends.

use crate::prompt::resolve_image_prompt;
use fresco_core::{CharacterProfile, StoryDocument, StyleProfile};
use fresco_error::{GenerationError, GenerationErrorKind};
use fresco_interface::{GenerationBackend, GenerationRequest, JobStatus, PollPolicy};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Result of one scene generation in a batch run.
#[derive(Debug)]
pub struct SceneOutcome {
    /// The scene the job was for
    pub scene: u32,
    /// The resolved asset URL, or why this scene failed
    pub result: Result<String, GenerationError>,
}

/// Drives one generation backend through the submit/poll lifecycle.
///
/// The orchestrator owns the timing policy; the backend owns the wire
/// contract. Batch runs are sequential by design: generation providers
/// rate-limit aggressively and scene order is meaningful to the user
/// watching progress.
pub struct SceneAssetOrchestrator {
    backend: Arc<dyn GenerationBackend>,
    policy: PollPolicy,
}

impl SceneAssetOrchestrator {
    /// Creates an orchestrator with the default poll policy.
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self::with_policy(backend, PollPolicy::default())
    }

    /// Creates an orchestrator with an explicit poll policy.
    pub fn with_policy(backend: Arc<dyn GenerationBackend>, policy: PollPolicy) -> Self {
        Self { backend, policy }
    }

    /// Generate the asset for one scene of a story.
    ///
    /// Fails with `SceneNotFound` before any backend call when the scene id
    /// is not in the document.
    #[instrument(skip(self, story, profile, style), fields(kind = %self.backend.kind()))]
    pub async fn generate_for_scene(
        &self,
        story: &StoryDocument,
        scene_id: u32,
        profile: &CharacterProfile,
        style: &StyleProfile,
    ) -> Result<String, GenerationError> {
        let scene = story
            .scene(scene_id)
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::SceneNotFound(scene_id)))?;

        let request = GenerationRequest {
            prompt: resolve_image_prompt(scene, profile),
            character: story.character.clone(),
            style_id: style.provider_style_id.clone(),
        };
        self.run(&request).await
    }

    /// Generate assets for every scene, in order.
    ///
    /// One scene failing does not abort the rest; the caller gets one
    /// outcome per scene and decides what to surface.
    #[instrument(skip(self, story, profile, style), fields(scenes = story.scenes.len()))]
    pub async fn generate_all(
        &self,
        story: &StoryDocument,
        profile: &CharacterProfile,
        style: &StyleProfile,
    ) -> Vec<SceneOutcome> {
        let mut outcomes = Vec::with_capacity(story.scenes.len());
        for scene in &story.scenes {
            let request = GenerationRequest {
                prompt: resolve_image_prompt(scene, profile),
                character: story.character.clone(),
                style_id: style.provider_style_id.clone(),
            };
            let result = self.run(&request).await;
            if let Err(e) = &result {
                warn!(scene = scene.scene, error = %e, "Scene generation failed, continuing batch");
            }
            outcomes.push(SceneOutcome {
                scene: scene.scene,
                result,
            });
        }
        outcomes
    }

    /// Submit one job and poll it to resolution.
    async fn run(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let job_id = self.backend.submit(request).await?;
        debug!(job_id = %job_id, "Generation job submitted");

        for attempt in 1..=self.policy.max_attempts {
            tokio::time::sleep(self.policy.poll_interval).await;
            // A garbled poll observation is not a verdict on the job, which
            // may still be running on the provider side. It consumes this
            // attempt and nothing more.
            let poll = match self.backend.poll(&job_id).await {
                Ok(poll) => poll,
                Err(e) if matches!(e.kind, GenerationErrorKind::MalformedResponse(_)) => {
                    warn!(job_id = %job_id, attempt, error = %e, "Malformed poll observation, treating as still running");
                    continue;
                }
                Err(e) => return Err(e),
            };
            match poll.status {
                JobStatus::Complete => match poll.asset_url {
                    Some(url) => {
                        info!(job_id = %job_id, attempt, "Generation job complete");
                        return Ok(url);
                    }
                    // Complete without a URL: the asset may still be
                    // materializing on the provider side.
                    None => {
                        warn!(job_id = %job_id, attempt, "Job complete but no asset URL yet");
                    }
                },
                JobStatus::Failed => {
                    let reason = poll
                        .failure_reason
                        .unwrap_or_else(|| "no failure reason given".to_string());
                    return Err(GenerationError::new(GenerationErrorKind::GenerationFailed(
                        reason,
                    )));
                }
                JobStatus::Pending | JobStatus::Running => {
                    debug!(job_id = %job_id, attempt, "Generation job still running");
                }
                JobStatus::Unknown(status) => {
                    warn!(job_id = %job_id, attempt, status = %status, "Unrecognized job status, treating as running");
                }
            }
        }

        Err(GenerationError::new(GenerationErrorKind::GenerationTimeout {
            attempts: self.policy.max_attempts,
        }))
    }
}

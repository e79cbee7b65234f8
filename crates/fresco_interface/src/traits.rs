//! Trait definitions for external collaborators.

use crate::{GenerationRequest, JobPoll};
use async_trait::async_trait;
use fresco_core::{AssetKind, GenerateRequest, GenerateResponse, StoryDocument};
use fresco_error::{GenerationError, ModelError, StoreError};

/// A vision-capable language model the studio can invoke.
///
/// The driver is the only component that talks to the LLM provider; the
/// extraction engine downstream is pure and consumes text only.
#[async_trait]
pub trait VisionDriver: Send + Sync {
    /// Generate model output given a multimodal request.
    async fn generate(&self, req: &GenerateRequest) -> Result<GenerateResponse, ModelError>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o").
    fn model_name(&self) -> &str;
}

/// An asynchronous request/poll generation service (image or video).
///
/// A job is submitted once and then observed through repeated polls; the
/// orchestrator owns the timing policy, the backend owns the wire contract.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// The kind of asset this backend produces.
    fn kind(&self) -> AssetKind;

    /// Submit a generation job, returning the provider job id.
    ///
    /// Fails with `SubmissionRejected` for synchronous rejections (missing
    /// credentials, malformed request, quota).
    async fn submit(&self, request: &GenerationRequest) -> Result<String, GenerationError>;

    /// Observe the current state of a previously submitted job.
    async fn poll(&self, job_id: &str) -> Result<JobPoll, GenerationError>;
}

/// Persistence for the single current story document.
///
/// The store holds exactly one document ("current story"). All mutation is
/// read-modify-write of the whole document with last-writer-wins semantics:
/// at most one session is assumed to mutate the document at a time. This is
/// a documented limitation, not a bug to silently fix.
#[async_trait]
pub trait StoryStore: Send + Sync {
    /// Load the current story, if one has been saved.
    async fn load(&self) -> Result<Option<StoryDocument>, StoreError>;

    /// Replace the current story.
    async fn save(&self, document: &StoryDocument) -> Result<(), StoreError>;
}

//! Core type definitions for the Fresco interface.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Status of an asynchronous generation job as reported by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    /// Job accepted but not started
    Pending,
    /// Job in progress
    Running,
    /// Job finished; the asset URL should be present
    Complete,
    /// Job failed terminally on the provider side
    Failed,
    /// Provider reported a status this client does not recognize.
    ///
    /// Treated by the orchestrator as still-running: logged, consumes one
    /// poll attempt, never aborts the job.
    Unknown(String),
}

/// One poll observation of a generation job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPoll {
    /// Reported job status
    pub status: JobStatus,
    /// Resolved asset URL, present when the job completed with output
    pub asset_url: Option<String>,
    /// Provider failure reason, present when the job failed
    pub failure_reason: Option<String>,
}

impl JobPoll {
    /// A still-running observation.
    pub fn running() -> Self {
        Self {
            status: JobStatus::Running,
            asset_url: None,
            failure_reason: None,
        }
    }

    /// A completed observation carrying the asset URL.
    pub fn complete(asset_url: impl Into<String>) -> Self {
        Self {
            status: JobStatus::Complete,
            asset_url: Some(asset_url.into()),
            failure_reason: None,
        }
    }

    /// A failed observation carrying the provider reason.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            status: JobStatus::Failed,
            asset_url: None,
            failure_reason: Some(reason.into()),
        }
    }
}

/// A resolved request to generate one asset for one scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Fully resolved generation prompt
    pub prompt: String,
    /// Character id the asset belongs to
    pub character: String,
    /// Provider style identifier
    pub style_id: String,
}

/// Polling configuration for one asset kind.
///
/// The delay and attempt ceiling are configuration, not hidden constants;
/// values may differ per asset kind.
///
/// # Examples
///
/// ```
/// use fresco_interface::PollPolicy;
///
/// let policy = PollPolicy::default();
/// assert_eq!(policy.max_attempts, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Fixed delay between poll attempts
    pub poll_interval: Duration,
    /// Maximum number of poll attempts before timing out
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            max_attempts: 10,
        }
    }
}

impl PollPolicy {
    /// Policy with no inter-poll delay, for tests and fast backends.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            poll_interval: Duration::ZERO,
            max_attempts,
        }
    }
}

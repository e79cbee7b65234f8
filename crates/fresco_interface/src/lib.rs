//! Trait definitions for the Fresco content-generation studio.
//!
//! These traits are the seams between the pure core (extraction,
//! orchestration policy) and the external collaborators (vision model,
//! generation job service, document store). Production clients live in
//! `fresco_models` and `fresco_store`; tests substitute scripted fakes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{GenerationBackend, StoryStore, VisionDriver};
pub use types::{GenerationRequest, JobPoll, JobStatus, PollPolicy};

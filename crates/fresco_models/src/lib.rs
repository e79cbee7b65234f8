//! Provider clients for the Fresco studio.
//!
//! Two real providers and one placeholder:
//! - [`OpenAiVisionClient`]: chat-completions vision driver used for story
//!   extraction prompts;
//! - [`LeonardoClient`]: asynchronous image generation over the
//!   submit/poll contract;
//! - [`StubVideoBackend`]: the video slot of the pipeline, which rejects
//!   submissions until a real backend lands.
//!
//! Clients own the wire contract only. Timing policy (poll intervals,
//! attempt ceilings) lives with the orchestrator, and response text parsing
//! lives with the extraction engine.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod leonardo;
mod openai;
mod video;

pub use leonardo::LeonardoClient;
pub use openai::OpenAiVisionClient;
pub use video::StubVideoBackend;

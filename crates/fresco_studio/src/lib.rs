//! The Fresco studio layer.
//!
//! Ties the pure extraction engine to the external collaborators: a vision
//! driver produces raw story text, the [`StoryService`] turns it into the
//! persisted current story, and the [`SceneAssetOrchestrator`] drives
//! submit/poll generation backends to fill scene asset slots.
//!
//! Prompt construction lives here too: the system prompt that teaches the
//! model the story format, and the per-scene image prompt resolution used
//! when a scene carries no explicit `image_prompt`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod diagnostics;
mod orchestrator;
mod prompt;
mod service;

pub use diagnostics::FileDiagnostics;
pub use orchestrator::{SceneAssetOrchestrator, SceneOutcome};
pub use prompt::{resolve_image_prompt, story_system_prompt, story_user_prompt};
pub use service::StoryService;

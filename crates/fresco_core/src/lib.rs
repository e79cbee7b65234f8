//! Core data types for the Fresco content-generation studio.
//!
//! This crate provides the foundation data types used across the Fresco
//! workspace: the story document model, the multimodal request types spoken
//! by vision-model drivers, and the injectable character and style lookup
//! tables.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod character;
mod input;
mod media;
mod message;
mod output;
mod request;
mod role;
mod scene;
mod style;

pub use character::{CharacterProfile, CharacterRegistry};
pub use input::Input;
pub use media::MediaSource;
pub use message::Message;
pub use output::Output;
pub use request::{GenerateRequest, GenerateResponse};
pub use role::Role;
pub use scene::{
    AssetKind, SceneRecord, StoryDocument, DEFAULT_SCENE_DURATION, UNKNOWN_ATTRIBUTE,
};
pub use style::{StyleCatalog, StyleProfile};

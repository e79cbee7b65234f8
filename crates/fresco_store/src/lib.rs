//! Story document persistence for the Fresco studio.
//!
//! The store holds exactly one document, the current story. Two backends
//! implement the [`fresco_interface::StoryStore`] contract:
//! - [`JsonFileStore`]: a JSON file on disk with atomic replace semantics;
//! - [`MemoryStore`]: an in-process store for tests and ephemeral sessions.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod memory;

pub use filesystem::JsonFileStore;
pub use memory::MemoryStore;

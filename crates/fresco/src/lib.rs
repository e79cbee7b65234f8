//! Fresco content-generation studio.
//!
//! Facade crate re-exporting the workspace: core data types, the
//! extraction engine, collaborator traits, provider clients, stores, and
//! the studio service layer. Depend on this crate to use Fresco as a
//! library; the `fresco` binary adds a CLI on top.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use fresco_core::*;
pub use fresco_error::*;
pub use fresco_extract::*;
pub use fresco_interface::*;
pub use fresco_models::*;
pub use fresco_store::*;
pub use fresco_studio::*;

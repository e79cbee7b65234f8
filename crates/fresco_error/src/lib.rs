//! Error types for the Fresco library.
//!
//! This crate provides the foundation error types used throughout the Fresco
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fresco_error::{FrescoResult, ModelError, ModelErrorKind};
//!
//! fn invoke_model() -> FrescoResult<String> {
//!     Err(ModelError::new(ModelErrorKind::Http("Connection refused".into())))?
//! }
//!
//! match invoke_model() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod extraction;
mod generation;
mod model;
mod store;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{FrescoError, FrescoErrorKind, FrescoResult};
pub use extraction::{ExtractionError, ExtractionErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use model::{ModelError, ModelErrorKind};
pub use store::{StoreError, StoreErrorKind};

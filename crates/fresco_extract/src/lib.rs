//! Free-text to structured story extraction for Fresco.
//!
//! Generative models return story text that loosely follows a documented
//! format but frequently deviates: smart quotes, single-quoted JSON,
//! unquoted keys, prose wrappers around the payload, unreliable scene
//! numbering. This crate turns such responses into a validated
//! [`fresco_core::StoryDocument`] deterministically, with defined repair and
//! fallback behavior, or fails with a typed
//! [`fresco_error::ExtractionError`].
//!
//! Parsing is attempted in order:
//! 1. refusal classification (policy refusals need a different remediation
//!    than malformed-but-willing responses);
//! 2. the structured grammar: a JSON object possibly wrapped in prose or
//!    markdown fences, repaired by [`normalize_json_candidate`];
//! 3. the line grammar: a marker-delimited two-section format with
//!    numbered scene blocks.
//!
//! The engine is pure: no network or storage side effects.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod json_grammar;
mod line_grammar;
mod normalize;

pub use engine::{ExtractionConfig, ExtractionEngine};
pub use normalize::normalize_json_candidate;

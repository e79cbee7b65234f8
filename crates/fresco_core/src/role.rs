//! Conversation roles for story-generation exchanges.

use serde::{Deserialize, Serialize};

/// Who authored a message in a story-generation exchange.
///
/// The studio uses a fixed three-message shape: a system message carrying
/// the scriptwriter instructions for one character, a user message carrying
/// the theme and optional reference image, and assistant messages holding
/// the model's raw story text.
///
/// # Examples
///
/// ```
/// use fresco_core::Role;
///
/// let scriptwriter_instructions = Role::System;
/// assert_ne!(scriptwriter_instructions, Role::Assistant);
/// assert_eq!(format!("{}", Role::User), "User");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// Scriptwriter instructions: character profile, format contract,
    /// scene budget
    System,
    /// The theme prompt and optional reference image
    User,
    /// Raw story text produced by the model
    Assistant,
}

//! Output types from model responses.

use serde::{Deserialize, Serialize};

/// Supported output types from vision-capable models.
///
/// The story pipeline only consumes free text; everything downstream of the
/// model response is handled by the extraction engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),
}

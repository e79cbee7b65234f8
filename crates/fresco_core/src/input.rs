//! Input types for vision-model requests.

use crate::MediaSource;
use serde::{Deserialize, Serialize};

/// Supported input types to vision-capable models.
///
/// The studio only needs text and image inputs: the story pipeline sends a
/// theme prompt together with the user-uploaded reference image.
///
/// # Examples
///
/// ```
/// use fresco_core::{Input, MediaSource};
///
/// let text = Input::Text("A day at the beach".to_string());
/// let image = Input::Image {
///     mime: Some("image/jpeg".to_string()),
///     source: MediaSource::Binary(vec![0xFF, 0xD8, 0xFF]),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),

    /// Image input (PNG, JPEG, WebP, etc.).
    Image {
        /// MIME type, e.g., "image/png" or "image/jpeg"
        mime: Option<String>,
        /// Media source (URL, base64, or raw bytes)
        source: MediaSource,
    },
}

//! Reference image sources.

use serde::{Deserialize, Serialize};

/// Where a reference image's bytes come from.
///
/// The studio reads user uploads as raw bytes; vision clients convert
/// whatever variant they receive into the provider's preferred shape.
/// The OpenAI client, for instance, inlines `Binary` and `Base64` sources
/// as `data:` URLs and passes hosted `Url` sources through untouched.
///
/// # Examples
///
/// ```
/// use fresco_core::MediaSource;
///
/// let upload = MediaSource::Binary(vec![0x89, 0x50, 0x4E, 0x47]);
/// let hosted = MediaSource::Url("https://cdn.example/reference.png".to_string());
/// assert_ne!(upload, hosted);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaSource {
    /// Hosted image the provider can fetch itself
    Url(String),
    /// Image already base64-encoded by the caller
    Base64(String),
    /// Raw image bytes, e.g. a fresh upload
    Binary(Vec<u8>),
}

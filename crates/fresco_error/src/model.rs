//! Model invocation error types.

/// Specific error conditions for LLM invocation.
///
/// These cover transport and provider failures, which are distinct from
/// parse-time extraction failures: the remediation differs (retry or fix
/// credentials versus rephrase or repair the response).
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelErrorKind {
    /// Required API key environment variable is not set
    #[display("Missing API key: {} is not set", _0)]
    MissingApiKey(String),
    /// Transport-level HTTP failure
    #[display("HTTP error: {}", _0)]
    Http(String),
    /// The provider returned a non-success status
    #[display("API error ({}): {}", status, message)]
    Api {
        /// HTTP status code returned by the provider
        status: u16,
        /// Provider error body
        message: String,
    },
    /// The provider response body could not be deserialized
    #[display("Failed to parse provider response: {}", _0)]
    Parse(String),
    /// The provider returned a response with no usable content
    #[display("Provider returned an empty response")]
    EmptyResponse,
}

/// Error type for model invocation.
///
/// # Examples
///
/// ```
/// use fresco_error::{ModelError, ModelErrorKind};
///
/// let err = ModelError::new(ModelErrorKind::MissingApiKey("OPENAI_API_KEY".into()));
/// assert!(format!("{}", err).contains("OPENAI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Model Error: {} at line {} in {}", kind, line, file)]
pub struct ModelError {
    /// The specific error condition
    pub kind: ModelErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ModelError {
    /// Create a new ModelError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

//! Asset generation error types.

/// Specific error conditions for asset generation and orchestration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The requested scene id does not exist in the document
    #[display("Scene {} not found in current story", _0)]
    SceneNotFound(u32),
    /// The generation service rejected the job submission
    #[display("Generation job submission rejected: {}", _0)]
    SubmissionRejected(String),
    /// The generation job reported a terminal failure
    #[display("Generation job failed: {}", _0)]
    GenerationFailed(String),
    /// The attempt ceiling was exhausted without a resolved asset
    #[display("Generation timed out after {} poll attempts", attempts)]
    GenerationTimeout {
        /// Number of poll attempts made before giving up
        attempts: u32,
    },
    /// The service returned a response the client could not interpret
    #[display("Malformed generation service response: {}", _0)]
    MalformedResponse(String),
}

/// Error type for asset generation operations.
///
/// # Examples
///
/// ```
/// use fresco_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::SceneNotFound(7));
/// assert!(format!("{}", err).contains("Scene 7"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

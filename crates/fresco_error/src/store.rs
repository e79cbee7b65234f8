//! Document store error types.

/// Specific error conditions for the story document store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StoreErrorKind {
    /// Underlying I/O failure
    #[display("Store I/O error: {}", _0)]
    Io(String),
    /// Document could not be serialized or deserialized
    #[display("Store serialization error: {}", _0)]
    Serialization(String),
    /// No current story exists in the store
    #[display("No current story has been saved")]
    NoCurrentStory,
}

/// Error type for story store operations.
///
/// # Examples
///
/// ```
/// use fresco_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::NoCurrentStory);
/// assert!(format!("{}", err).contains("current story"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The specific error condition
    pub kind: StoreErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoreError {
    /// Create a new StoreError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

//! Story extraction error types.

/// Specific error conditions for story extraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ExtractionErrorKind {
    /// The model declined to produce a story (policy refusal)
    #[display("Model refused to generate a story; rephrase the prompt")]
    ModelRefused,
    /// A required section marker was not found in the response
    #[display("Missing section: {}", _0)]
    MissingSection(String),
    /// The summary section was present but empty
    #[display("Summary section is empty")]
    EmptySummary,
    /// The cutscenes section yielded no usable scene blocks
    #[display("No scenes found in cutscenes section")]
    NoScenesFound,
    /// Neither the structured nor the line grammar could parse the response.
    ///
    /// Carries the verbatim raw text so callers can persist it for
    /// later inspection.
    #[display("Unparsable model response ({} bytes)", raw.len())]
    UnparsableResponse {
        /// The original raw response text, preserved verbatim
        raw: String,
    },
}

/// Error type for story extraction.
///
/// # Examples
///
/// ```
/// use fresco_error::{ExtractionError, ExtractionErrorKind};
///
/// let err = ExtractionError::new(ExtractionErrorKind::EmptySummary);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extraction Error: {} at line {} in {}", kind, line, file)]
pub struct ExtractionError {
    /// The specific error condition
    pub kind: ExtractionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ExtractionError {
    /// Create a new ExtractionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// The raw response text, when this error preserves one.
    pub fn raw_text(&self) -> Option<&str> {
        match &self.kind {
            ExtractionErrorKind::UnparsableResponse { raw } => Some(raw),
            _ => None,
        }
    }
}

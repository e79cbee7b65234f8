//! Top-level error wrapper types.

use crate::{ConfigError, ExtractionError, GenerationError, ModelError, StoreError};

/// This is the foundation error enum aggregating the per-domain errors of
/// the Fresco workspace.
///
/// # Examples
///
/// ```
/// use fresco_error::{FrescoError, StoreError, StoreErrorKind};
///
/// let store_err = StoreError::new(StoreErrorKind::NoCurrentStory);
/// let err: FrescoError = store_err.into();
/// assert!(format!("{}", err).contains("Store Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FrescoErrorKind {
    /// Story extraction error
    #[from(ExtractionError)]
    Extraction(ExtractionError),
    /// Asset generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Model invocation error
    #[from(ModelError)]
    Model(ModelError),
    /// Document store error
    #[from(StoreError)]
    Store(StoreError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Fresco error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fresco_error::{FrescoResult, ConfigError, ConfigErrorKind};
///
/// fn might_fail() -> FrescoResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::MissingEnv("LEONARDO_API_KEY".into())))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fresco Error: {}", _0)]
pub struct FrescoError(Box<FrescoErrorKind>);

impl FrescoError {
    /// Create a new error from a kind.
    pub fn new(kind: FrescoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FrescoErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FrescoErrorKind
impl<T> From<T> for FrescoError
where
    T: Into<FrescoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fresco operations.
///
/// # Examples
///
/// ```
/// use fresco_error::{FrescoResult, ModelError, ModelErrorKind};
///
/// fn fetch_story() -> FrescoResult<String> {
///     Err(ModelError::new(ModelErrorKind::EmptyResponse))?
/// }
/// ```
pub type FrescoResult<T> = std::result::Result<T, FrescoError>;

//! Configuration error types.

/// Specific error conditions for studio configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Character id is not present in the registry
    #[display("Unknown character: {}", _0)]
    UnknownCharacter(String),
    /// Required environment variable is not set
    #[display("Missing environment variable: {}", _0)]
    MissingEnv(String),
}

/// Error type for configuration problems.
///
/// # Examples
///
/// ```
/// use fresco_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::UnknownCharacter("robo".into()));
/// assert!(format!("{}", err).contains("robo"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Config Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The specific error condition
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

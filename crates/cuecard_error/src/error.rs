//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, GenerationError, JsonError, ServerError};

/// Every error the Cuecard crates can surface.
///
/// # Examples
///
/// ```
/// use cuecard_error::{CuecardError, JsonError};
///
/// let json_err = JsonError::new("trailing characters");
/// let err: CuecardError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CuecardErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini provider error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Flashcard generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// HTTP boundary error
    #[from(ServerError)]
    Server(ServerError),
}

/// Cuecard error with kind discrimination.
///
/// # Examples
///
/// ```
/// use cuecard_error::{CuecardResult, ConfigError};
///
/// fn might_fail() -> CuecardResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Cuecard Error: {}", _0)]
pub struct CuecardError(Box<CuecardErrorKind>);

impl CuecardError {
    /// Create a new error from a kind.
    pub fn new(kind: CuecardErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CuecardErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CuecardErrorKind
impl<T> From<T> for CuecardError
where
    T: Into<CuecardErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Cuecard operations.
pub type CuecardResult<T> = std::result::Result<T, CuecardError>;

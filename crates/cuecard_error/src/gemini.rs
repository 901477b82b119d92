//! Gemini-specific error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key not configured
    #[display("GEMINI_API_KEY not set and no gemini.api_key configured")]
    MissingApiKey,
    /// Failed to create the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// Request never produced an HTTP response (connect, timeout, TLS)
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response body was not the expected envelope
    #[display("Failed to decode Gemini response: {}", _0)]
    Decode(String),
}

impl GeminiErrorKind {
    /// Check if the provider signalled a transient condition.
    ///
    /// Only used for diagnostics: the generation loop retries every
    /// attempt-level failure regardless.
    pub fn is_transient(&self) -> bool {
        match self {
            GeminiErrorKind::HttpError { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            GeminiErrorKind::ApiRequest(_) => true,
            _ => false,
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use cuecard_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overload_statuses_are_transient() {
        for status_code in [429, 503] {
            let kind = GeminiErrorKind::HttpError {
                status_code,
                message: "busy".to_string(),
            };
            assert!(kind.is_transient());
        }
    }

    #[test]
    fn auth_failures_are_not_transient() {
        let kind = GeminiErrorKind::HttpError {
            status_code: 403,
            message: "PERMISSION_DENIED".to_string(),
        };
        assert!(!kind.is_transient());
        assert!(!GeminiErrorKind::MissingApiKey.is_transient());
    }
}

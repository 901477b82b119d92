//! Flashcard generation errors.
//!
//! Attempt-level kinds ([`NoPayload`], [`MalformedPayload`], [`SchemaViolation`],
//! [`Transport`]) are consumed by the retry loop and only ever logged. Terminal
//! kinds ([`AttemptsExhausted`], [`Cancelled`]) are what callers of the
//! orchestrator actually see. [`EmptyTopic`] is raised at the input boundary
//! before any generation starts.
//!
//! [`NoPayload`]: GenerationErrorKind::NoPayload
//! [`MalformedPayload`]: GenerationErrorKind::MalformedPayload
//! [`SchemaViolation`]: GenerationErrorKind::SchemaViolation
//! [`Transport`]: GenerationErrorKind::Transport
//! [`AttemptsExhausted`]: GenerationErrorKind::AttemptsExhausted
//! [`Cancelled`]: GenerationErrorKind::Cancelled
//! [`EmptyTopic`]: GenerationErrorKind::EmptyTopic

/// Reasons a parsed payload does not form a valid flashcard set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SchemaViolation {
    /// The payload parsed, but its top level is not a sequence
    #[display("Payload is not a JSON array")]
    NotAnArray,
    /// Wrong number of records
    #[display("Invalid flashcard count: expected {expected}, found {found}")]
    WrongCount {
        /// Required number of cards
        expected: usize,
        /// Number of cards the model produced
        found: usize,
    },
    /// A record lacks a field, or the field is empty or not a string
    #[display("Missing fields in flashcard {index}: {field}")]
    MissingField {
        /// Zero-based position of the offending record
        index: usize,
        /// Name of the missing field
        field: &'static str,
    },
    /// A difficulty outside {easy, medium, hard}
    #[display("Unknown difficulty in flashcard {index}: {value}")]
    UnknownDifficulty {
        /// Zero-based position of the offending record
        index: usize,
        /// The value the model produced
        value: String,
    },
    /// Difficulty counts are not exactly 5/5/5
    #[display("Wrong difficulty distribution: easy={easy}, medium={medium}, hard={hard}")]
    WrongDistribution {
        /// Number of easy cards
        easy: usize,
        /// Number of medium cards
        medium: usize,
        /// Number of hard cards
        hard: usize,
    },
}

/// Flashcard generation error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Caller supplied an empty or whitespace-only topic
    #[display("Topic is required")]
    EmptyTopic,
    /// The model response carried no extractable text
    #[display("No text output from model")]
    NoPayload,
    /// The text could not be parsed as JSON
    #[display("Malformed payload: {}", _0)]
    MalformedPayload(String),
    /// The JSON parsed but is not a valid flashcard set
    #[display("{}", _0)]
    SchemaViolation(SchemaViolation),
    /// The model client call itself failed
    #[display("Model request failed: {}", _0)]
    Transport(String),
    /// Every attempt failed
    #[display("Max retries exceeded")]
    AttemptsExhausted {
        /// Number of attempts that were made
        attempts: usize,
    },
    /// Generation was cancelled from outside
    #[display("Generation cancelled")]
    Cancelled,
}

impl GenerationErrorKind {
    /// Returns true for kinds that end a generation call.
    ///
    /// Everything else is an attempt-level failure the orchestrator retries.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GenerationErrorKind::EmptyTopic
                | GenerationErrorKind::AttemptsExhausted { .. }
                | GenerationErrorKind::Cancelled
        )
    }
}

impl From<SchemaViolation> for GenerationErrorKind {
    fn from(violation: SchemaViolation) -> Self {
        GenerationErrorKind::SchemaViolation(violation)
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use cuecard_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::AttemptsExhausted { attempts: 3 });
/// assert!(err.kind.is_terminal());
/// assert!(format!("{}", err).contains("Max retries exceeded"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
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

impl From<SchemaViolation> for GenerationError {
    #[track_caller]
    fn from(violation: SchemaViolation) -> Self {
        Self::new(violation.into())
    }
}

/// Result type for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;

//! The caller-supplied topic.

use cuecard_error::{GenerationError, GenerationErrorKind, GenerationResult};
use serde::Serialize;

/// A trimmed, non-empty topic string.
///
/// This is the only external input to generation. Construction is the input
/// boundary: once a `Topic` exists it is never empty or whitespace-only.
///
/// # Examples
///
/// ```
/// use cuecard_core::Topic;
///
/// let topic = Topic::new("  Photosynthesis \n").unwrap();
/// assert_eq!(topic.as_str(), "Photosynthesis");
///
/// assert!(Topic::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    /// Trim `raw` and reject it if nothing is left.
    #[track_caller]
    pub fn new(raw: impl AsRef<str>) -> GenerationResult<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyTopic));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The topic text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Topic {
    type Err = GenerationError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

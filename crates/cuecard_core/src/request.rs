//! Request and response envelope for model calls.
//!
//! The response shape mirrors the Gemini `generateContent` body: a list of
//! candidates, each with optional content made of optional text parts. Every
//! level may be absent, and [`GenerateResponse::text`] is the one place that
//! walks it.

use serde::{Deserialize, Serialize};

/// A single text-generation request.
///
/// # Examples
///
/// ```
/// use cuecard_core::GenerateRequest;
///
/// let request = GenerateRequest::builder()
///     .prompt("Generate exactly 15 flashcards")
///     .model("gemini-2.5-flash")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.model().as_deref(), Some("gemini-2.5-flash"));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The instruction text sent to the model
    prompt: String,
    /// Model override; the driver's default is used when `None`
    #[builder(default, setter(into, strip_option))]
    model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// A request for `prompt` against the driver's default model.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
        }
    }

    /// Replace the model override.
    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }
}

/// A text part of a candidate's content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text, when the part carries any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// The content of one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Ordered parts
    #[serde(default)]
    pub parts: Vec<Part>,
    /// Producer role, usually `"model"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// One candidate completion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Content; missing when the provider blocked or truncated output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// Why generation stopped (e.g. `STOP`, `SAFETY`, `MAX_TOKENS`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// The model's response envelope.
///
/// # Examples
///
/// ```
/// use cuecard_core::GenerateResponse;
///
/// let response = GenerateResponse::from_text("[]");
/// assert_eq!(response.text(), Some("[]"));
///
/// assert_eq!(GenerateResponse::default().text(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Candidate completions, best first
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// A single-candidate response carrying `text`.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![Part {
                        text: Some(text.into()),
                    }],
                    role: Some("model".to_string()),
                }),
                finish_reason: Some("STOP".to_string()),
            }],
        }
    }

    /// The primary text payload: the first non-empty text part of the first
    /// candidate.
    ///
    /// Returns `None` when there are no candidates, the first candidate has
    /// no content, or none of its parts carry text.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .find(|text| !text.is_empty())
    }

    /// Finish reason of the first candidate, for diagnostics.
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
    }
}

//! Payload extraction, parsing and semantic validation.
//!
//! Checks run in a fixed order and the first failure wins:
//! sequence, count, per-record fields, difficulty values, distribution.

use cuecard_core::{Difficulty, FLASHCARD_COUNT, Flashcard, FlashcardSet, GenerateResponse};
use cuecard_error::{GenerationErrorKind, SchemaViolation};
use serde_json::{Map, Value};

use crate::sanitize::sanitize;

const FIELDS: [&str; 3] = ["question", "answer", "difficulty"];

/// The text payload of a model response.
///
/// # Errors
///
/// [`GenerationErrorKind::NoPayload`] when no candidate carries text.
pub fn extract_payload(response: &GenerateResponse) -> Result<&str, GenerationErrorKind> {
    response.text().ok_or(GenerationErrorKind::NoPayload)
}

/// Sanitize `raw`, parse it as JSON and validate the result.
///
/// # Errors
///
/// [`GenerationErrorKind::MalformedPayload`] when the sanitized text is not
/// JSON, [`GenerationErrorKind::SchemaViolation`] when it is JSON of the
/// wrong shape.
///
/// # Examples
///
/// ```
/// use cuecard_generation::parse_flashcards;
/// use cuecard_error::GenerationErrorKind;
///
/// let err = parse_flashcards("Sure! Here are your cards").unwrap_err();
/// assert!(matches!(err, GenerationErrorKind::MalformedPayload(_)));
/// ```
pub fn parse_flashcards(raw: &str) -> Result<FlashcardSet, GenerationErrorKind> {
    let clean = sanitize(raw);
    let value: Value = serde_json::from_str(&clean).map_err(|e| {
        tracing::debug!(payload_len = clean.len(), error = %e, "Payload is not JSON");
        GenerationErrorKind::MalformedPayload(e.to_string())
    })?;
    Ok(validate_flashcards(&value)?)
}

/// Check a parsed payload against the flashcard set rules.
///
/// Fields must be non-empty strings. Extra fields on a record are ignored.
///
/// # Errors
///
/// The first [`SchemaViolation`] encountered.
pub fn validate_flashcards(value: &Value) -> Result<FlashcardSet, SchemaViolation> {
    let items = value.as_array().ok_or(SchemaViolation::NotAnArray)?;

    if items.len() != FLASHCARD_COUNT {
        return Err(SchemaViolation::WrongCount {
            expected: FLASHCARD_COUNT,
            found: items.len(),
        });
    }

    let records = items
        .iter()
        .enumerate()
        .map(|(index, item)| record_fields(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    let cards = records
        .into_iter()
        .enumerate()
        .map(|(index, [question, answer, difficulty])| -> Result<Flashcard, SchemaViolation> {
            let difficulty = difficulty.parse::<Difficulty>().map_err(|_| {
                SchemaViolation::UnknownDifficulty {
                    index,
                    value: difficulty.to_string(),
                }
            })?;
            Ok(Flashcard::new(question, answer, difficulty))
        })
        .collect::<Result<Vec<_>, _>>()?;

    FlashcardSet::try_from_cards(cards)
}

fn record_fields(index: usize, item: &Value) -> Result<[&str; 3], SchemaViolation> {
    let missing = |field: &'static str| SchemaViolation::MissingField { index, field };
    let object: &Map<String, Value> = item.as_object().ok_or(missing(FIELDS[0]))?;

    let mut out = [""; 3];
    for (slot, field) in out.iter_mut().zip(FIELDS) {
        *slot = object
            .get(field)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .ok_or(missing(field))?;
    }
    Ok(out)
}

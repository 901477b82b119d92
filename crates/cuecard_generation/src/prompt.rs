//! Prompt rendering.

use cuecard_core::{CARDS_PER_DIFFICULTY, Difficulty, FLASHCARD_COUNT, Topic};
use strum::IntoEnumIterator;

/// Render the instruction text for `topic`.
///
/// The text states the card count, the exact 5/5/5 split, the required
/// per-card fields, and asks for raw JSON only. The topic is embedded
/// verbatim inside double quotes. Pure and deterministic.
///
/// # Examples
///
/// ```
/// use cuecard_core::Topic;
/// use cuecard_generation::build_prompt;
///
/// let prompt = build_prompt(&Topic::new("Photosynthesis").unwrap());
/// assert!(prompt.contains("exactly 15 flashcards"));
/// assert!(prompt.contains("\"Photosynthesis\""));
/// assert!(prompt.contains("5 easy, 5 medium, 5 hard"));
/// ```
pub fn build_prompt(topic: &Topic) -> String {
    let levels = Difficulty::iter()
        .map(|d| format!("\"{d}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let split = Difficulty::iter()
        .map(|d| format!("{CARDS_PER_DIFFICULTY} {d}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Generate exactly {FLASHCARD_COUNT} flashcards about \"{topic}\".\n\
         Return ONLY valid JSON: a single array of objects. No markdown, no backticks.\n\
         Each flashcard must have: question, answer, difficulty.\n\
         Difficulty must be one of {levels}.\n\
         Difficulty must be: {split}.\n",
        topic = topic.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_is_deterministic() {
        let topic = Topic::new("Rust lifetimes").unwrap();
        assert_eq!(build_prompt(&topic), build_prompt(&topic));
    }

    #[test]
    fn prompt_names_allowed_levels() {
        let prompt = build_prompt(&Topic::new("x").unwrap());
        assert!(prompt.contains("\"easy\", \"medium\", \"hard\""));
    }
}

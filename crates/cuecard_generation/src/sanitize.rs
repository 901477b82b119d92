//! Removal of formatting fences from model output.

use regex::Regex;
use std::sync::LazyLock;

static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```json|```").expect("Valid fence regex"));

/// Strip every ` ```json ` and ` ``` ` marker, then trim surrounding whitespace.
///
/// Removal is repeated until nothing changes, so fragments that only form a
/// fence after an inner one is removed are stripped too and
/// `sanitize(sanitize(x)) == sanitize(x)` holds for every input.
///
/// # Examples
///
/// ```
/// use cuecard_generation::sanitize;
///
/// assert_eq!(sanitize("```json\n[1, 2]\n```\n"), "[1, 2]");
/// assert_eq!(sanitize("  [] "), "[]");
/// ```
pub fn sanitize(text: &str) -> String {
    let mut current = text.trim().to_string();
    loop {
        let next = FENCE.replace_all(&current, "").trim().to_string();
        if next == current {
            return current;
        }
        current = next;
    }
}

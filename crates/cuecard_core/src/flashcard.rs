//! Flashcards and the validated 15-card set.

use cuecard_error::SchemaViolation;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Number of cards in every flashcard set.
pub const FLASHCARD_COUNT: usize = 15;

/// Number of cards required at each difficulty.
pub const CARDS_PER_DIFFICULTY: usize = 5;

/// How hard a card is.
///
/// Serialized in lowercase, which is also the only spelling accepted from
/// model output.
///
/// # Examples
///
/// ```
/// use cuecard_core::Difficulty;
///
/// assert_eq!(Difficulty::Medium.to_string(), "medium");
/// assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
/// assert!("Hard".parse::<Difficulty>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Recall of basic facts
    Easy,
    /// Requires connecting ideas
    Medium,
    /// Requires deeper understanding
    Hard,
}

/// A single question/answer/difficulty record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flashcard {
    /// The prompt shown first
    pub question: String,
    /// The revealed answer
    pub answer: String,
    /// How hard the card is
    pub difficulty: Difficulty,
}

impl Flashcard {
    /// Create a flashcard.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            difficulty,
        }
    }
}

/// Exactly [`FLASHCARD_COUNT`] cards, [`CARDS_PER_DIFFICULTY`] at each difficulty.
///
/// Order is the order the model produced. The only way to obtain a set is
/// [`FlashcardSet::try_from_cards`] (or deserialization, which goes through
/// it), so every value of this type satisfies the distribution.
///
/// # Examples
///
/// ```
/// use cuecard_core::{Difficulty, Flashcard, FlashcardSet};
///
/// let cards: Vec<Flashcard> = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
///     .into_iter()
///     .flat_map(|d| (0..5).map(move |i| Flashcard::new(format!("Q{i}"), "A", d)))
///     .collect();
///
/// let set = FlashcardSet::try_from_cards(cards).unwrap();
/// assert_eq!(set.len(), 15);
/// assert_eq!(set.count(Difficulty::Hard), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Flashcard>", into = "Vec<Flashcard>")]
pub struct FlashcardSet {
    cards: Vec<Flashcard>,
}

impl FlashcardSet {
    /// Check cardinality and distribution, then wrap the cards.
    ///
    /// # Errors
    ///
    /// [`SchemaViolation::WrongCount`] when there are not exactly 15 cards,
    /// [`SchemaViolation::WrongDistribution`] when the difficulties are not 5/5/5.
    pub fn try_from_cards(cards: Vec<Flashcard>) -> Result<Self, SchemaViolation> {
        if cards.len() != FLASHCARD_COUNT {
            return Err(SchemaViolation::WrongCount {
                expected: FLASHCARD_COUNT,
                found: cards.len(),
            });
        }

        let tally = |difficulty: Difficulty| {
            cards
                .iter()
                .filter(|card| card.difficulty == difficulty)
                .count()
        };
        let (easy, medium, hard) = (
            tally(Difficulty::Easy),
            tally(Difficulty::Medium),
            tally(Difficulty::Hard),
        );

        if Difficulty::iter().any(|d| tally(d) != CARDS_PER_DIFFICULTY) {
            return Err(SchemaViolation::WrongDistribution { easy, medium, hard });
        }

        Ok(Self { cards })
    }

    /// The cards in presentation order.
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    /// Number of cards (always [`FLASHCARD_COUNT`]).
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the cards in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Flashcard> {
        self.cards.iter()
    }

    /// Number of cards at `difficulty`.
    pub fn count(&self, difficulty: Difficulty) -> usize {
        self.cards
            .iter()
            .filter(|card| card.difficulty == difficulty)
            .count()
    }

    /// Give up the set and keep the cards.
    pub fn into_cards(self) -> Vec<Flashcard> {
        self.cards
    }
}

impl TryFrom<Vec<Flashcard>> for FlashcardSet {
    type Error = SchemaViolation;

    fn try_from(cards: Vec<Flashcard>) -> Result<Self, Self::Error> {
        Self::try_from_cards(cards)
    }
}

impl From<FlashcardSet> for Vec<Flashcard> {
    fn from(set: FlashcardSet) -> Self {
        set.cards
    }
}

impl IntoIterator for FlashcardSet {
    type Item = Flashcard;
    type IntoIter = std::vec::IntoIter<Flashcard>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a FlashcardSet {
    type Item = &'a Flashcard;
    type IntoIter = std::slice::Iter<'a, Flashcard>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

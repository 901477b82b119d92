//! Flashcard generation pipeline for Cuecard.
//!
//! This crate turns a [`Topic`](cuecard_core::Topic) into a validated
//! [`FlashcardSet`](cuecard_core::FlashcardSet) by driving any
//! [`ModelDriver`](cuecard_interface::ModelDriver):
//!
//! - [`build_prompt`] renders the instruction text
//! - [`sanitize`] strips formatting fences from model output
//! - [`parse_flashcards`] and [`validate_flashcards`] enforce the 15-card, 5/5/5 shape
//! - [`FlashcardGenerator`] runs the bounded, cancellable retry loop
//!
//! # Example
//!
//! ```no_run
//! use cuecard_core::{GeneratorConfig, Topic};
//! use cuecard_generation::FlashcardGenerator;
//! use cuecard_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = FlashcardGenerator::new(GeminiClient::new()?, GeneratorConfig::default())?;
//! let set = generator.generate(&Topic::new("Photosynthesis")?).await?;
//! assert_eq!(set.len(), 15);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod orchestrator;
mod prompt;
mod sanitize;
mod validate;

pub use orchestrator::{AttemptFailure, FlashcardGenerator};
pub use prompt::build_prompt;
pub use sanitize::sanitize;
pub use validate::{extract_payload, parse_flashcards, validate_flashcards};

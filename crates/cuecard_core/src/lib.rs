//! Core data types for the Cuecard flashcard generator.
//!
//! This crate provides the data model shared by every Cuecard crate: the
//! caller's [`Topic`], the [`Flashcard`] records, the validated
//! [`FlashcardSet`], the provider-neutral model envelope, and the
//! [`GeneratorConfig`] that drives the retry loop.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod flashcard;
mod request;
mod topic;

pub use config::{DEFAULT_MAX_ATTEMPTS, GeneratorConfig, GeneratorConfigBuilder};
pub use flashcard::{CARDS_PER_DIFFICULTY, Difficulty, FLASHCARD_COUNT, Flashcard, FlashcardSet};
pub use request::{
    Candidate, Content, GenerateRequest, GenerateRequestBuilder, GenerateResponse, Part,
};
pub use topic::Topic;

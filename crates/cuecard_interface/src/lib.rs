//! Trait definitions for the Cuecard flashcard generator.
//!
//! This crate provides the seam between the generation pipeline and the
//! external text-generation provider.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::ModelDriver;

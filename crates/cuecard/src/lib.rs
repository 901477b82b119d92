//! Cuecard - balanced flashcard sets from a generative model.
//!
//! Give Cuecard a topic and it returns exactly 15 question/answer cards,
//! 5 easy, 5 medium and 5 hard. Model output is sanitized, parsed and
//! validated, and the request is retried a bounded number of times when the
//! model gets the shape wrong.
//!
//! # Quick Start
//!
//! ```no_run
//! use cuecard::{FlashcardGenerator, GeminiClient, GeneratorConfig, Topic};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = FlashcardGenerator::new(GeminiClient::new()?, GeneratorConfig::default())?;
//! let set = generator.generate(&Topic::new("Photosynthesis")?).await?;
//!
//! for card in &set {
//!     println!("[{}] {} -> {}", card.difficulty, card.question, card.answer);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `cuecard_error` - Error types
//! - `cuecard_core` - Topic, flashcards and the model envelope
//! - `cuecard_interface` - `ModelDriver` trait
//! - `cuecard_models` - Gemini REST client
//! - `cuecard_generation` - Prompt, validation and the retry loop
//! - `cuecard_server` - HTTP API and configuration
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use cuecard_core::{
    CARDS_PER_DIFFICULTY, Candidate, Content, DEFAULT_MAX_ATTEMPTS, Difficulty, FLASHCARD_COUNT,
    Flashcard, FlashcardSet, GenerateRequest, GenerateRequestBuilder, GenerateResponse,
    GeneratorConfig, GeneratorConfigBuilder, Part, Topic,
};
pub use cuecard_error::{
    ConfigError, CuecardError, CuecardErrorKind, CuecardResult, GeminiError, GeminiErrorKind,
    GenerationError, GenerationErrorKind, GenerationResult, JsonError,
    SchemaViolation, ServerError, ServerErrorKind,
};
pub use cuecard_generation::{
    AttemptFailure, FlashcardGenerator, build_prompt, extract_payload, parse_flashcards,
    sanitize, validate_flashcards,
};
pub use cuecard_interface::ModelDriver;
pub use cuecard_models::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, GeminiConfig, GeminiConfigBuilder, ModelInfo,
};
pub use cuecard_server::{
    ApiError, AppState, CuecardConfig, DEFAULT_PORT, GenerateFlashcardsRequest,
    GenerateFlashcardsResponse, ServerConfig, SharedDriver, create_router, gemini_state, serve,
    state_for,
};

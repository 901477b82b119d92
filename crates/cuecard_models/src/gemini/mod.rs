//! Google Gemini REST client.
//!
//! - [`GeminiClient`] implements [`cuecard_interface::ModelDriver`] over
//!   `models/{model}:generateContent`
//! - [`GeminiClient::list_models`] enumerates the models the key can use

mod client;
mod config;
mod dto;

pub use client::GeminiClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig, GeminiConfigBuilder};
pub use dto::ModelInfo;

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, cuecard_error::GeminiError>;

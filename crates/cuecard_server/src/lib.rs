//! HTTP boundary for the Cuecard flashcard generator.
//!
//! Exposes the generator over a small JSON API with permissive CORS, and
//! owns configuration loading for the server and CLI.
//!
//! # Example
//!
//! ```no_run
//! use cuecard_server::{CuecardConfig, serve};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! serve(CuecardConfig::load()?).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod server;

pub use api::{
    ApiError, AppState, GenerateFlashcardsRequest, GenerateFlashcardsResponse, SharedDriver,
    create_router,
};
pub use config::{CuecardConfig, DEFAULT_PORT, ServerConfig};
pub use server::{gemini_state, serve, state_for};

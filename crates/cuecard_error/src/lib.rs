//! Error types for the Cuecard library.
//!
//! This crate provides the foundation error types used throughout the Cuecard workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use cuecard_error::{ConfigError, CuecardResult};
//!
//! fn fetch_data() -> CuecardResult<String> {
//!     Err(ConfigError::new("max_attempts must be at least 1"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod generation;
mod json;
mod server;

pub use config::ConfigError;
pub use error::{CuecardError, CuecardErrorKind, CuecardResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult, SchemaViolation};
pub use json::JsonError;
pub use server::{ServerError, ServerErrorKind};

//! Model provider integrations for Cuecard.
//!
//! # Available Providers
//!
//! - **Gemini** (Google) via the `generateContent` REST API
//!
//! # Example
//!
//! ```no_run
//! use cuecard_models::GeminiClient;
//! use cuecard_interface::ModelDriver;
//! use cuecard_core::GenerateRequest;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let response = client.generate(&GenerateRequest::new("Hello")).await?;
//! println!("{:?}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, GeminiConfig, GeminiConfigBuilder, ModelInfo,
};

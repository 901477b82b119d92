//! Connection settings for the Gemini client.

use serde::{Deserialize, Serialize};

/// Base URL of the Gemini model collection.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model used when neither config nor request names one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini client configuration.
///
/// `api_key` falls back to the `GEMINI_API_KEY` environment variable when unset.
///
/// # Examples
///
/// ```
/// use cuecard_models::GeminiConfig;
///
/// let config = GeminiConfig::builder()
///     .api_key("test-key")
///     .base_url("http://localhost:9000/models")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.model(), "gemini-2.5-flash");
/// ```
#[derive(
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// API key; `None` means read `GEMINI_API_KEY`
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    api_key: Option<String>,

    /// Model collection URL, without a trailing slash
    #[serde(default = "default_base_url")]
    #[builder(default = "default_base_url()")]
    base_url: String,

    /// Default model identifier
    #[serde(default = "default_model")]
    #[builder(default = "default_model()")]
    model: String,

    /// Per-request HTTP timeout in seconds; `None` leaves calls unbounded
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: None,
        }
    }
}

impl GeminiConfig {
    /// Creates a new config builder.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

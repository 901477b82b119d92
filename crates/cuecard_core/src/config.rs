//! Generation configuration.

use cuecard_error::ConfigError;
use serde::{Deserialize, Serialize};

/// Attempt budget used when none is configured.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Options recognized by the generation orchestrator.
///
/// Passed in at construction; nothing in the pipeline reads process-wide
/// state. Provider credentials live with the model client, not here.
///
/// # Examples
///
/// ```
/// use cuecard_core::GeneratorConfig;
///
/// let config = GeneratorConfig::builder().max_attempts(5usize).build().unwrap();
/// assert_eq!(*config.max_attempts(), 5);
/// assert!(config.validate().is_ok());
///
/// assert_eq!(*GeneratorConfig::default().max_attempts(), 3);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(deny_unknown_fields)]
#[builder(default)]
pub struct GeneratorConfig {
    /// Upper bound on model calls per generation (at least 1)
    #[serde(default = "default_max_attempts")]
    max_attempts: usize,

    /// Model override passed through to the driver
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    model: Option<String>,
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            model: None,
        }
    }
}

impl GeneratorConfig {
    /// Creates a new config builder.
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Validates that the attempt budget allows at least one call.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_attempts` is zero.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::new("max_attempts must be at least 1"));
        }
        Ok(())
    }

    /// Return a copy with a different attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Return a copy with a different model override.
    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }
}

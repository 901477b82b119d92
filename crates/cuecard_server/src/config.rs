//! Layered configuration for the server and CLI.

use config::{Config, Environment, File, FileFormat};
use cuecard_core::GeneratorConfig;
use cuecard_error::{ConfigError, CuecardResult};
use cuecard_models::GeminiConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../cuecard.toml");

/// Port used when neither config nor `PORT` sets one.
pub const DEFAULT_PORT: u16 = 3001;

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    host: String,
    /// TCP port
    #[serde(default = "default_port")]
    port: u16,
    /// Deadline for one generation request, in seconds
    #[serde(default)]
    request_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: DEFAULT_PORT,
            request_timeout_secs: None,
        }
    }
}

impl ServerConfig {
    /// Return a copy listening on `port`.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Return a copy with a request deadline.
    pub fn with_request_timeout(mut self, secs: Option<u64>) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// The request deadline, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Top-level Cuecard configuration.
///
/// Sources, later overriding earlier:
/// 1. Bundled defaults (`cuecard.toml` shipped with the crate)
/// 2. `~/.config/cuecard/cuecard.toml`
/// 3. `./cuecard.toml`, or the file passed to [`CuecardConfig::load_with`]
/// 4. `CUECARD_<SECTION>__<KEY>` environment variables
/// 5. `PORT`, for the listen port
///
/// # Example
///
/// ```no_run
/// use cuecard_server::CuecardConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CuecardConfig::load()?;
/// println!("Listening on port {}", config.server().port());
/// # Ok(())
/// # }
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct CuecardConfig {
    /// Retry loop settings
    #[serde(default)]
    generation: GeneratorConfig,
    /// Gemini client settings
    #[serde(default)]
    gemini: GeminiConfig,
    /// HTTP listener settings
    #[serde(default)]
    server: ServerConfig,
}

impl CuecardConfig {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be parsed or the result
    /// fails validation.
    #[instrument]
    pub fn load() -> CuecardResult<Self> {
        Self::load_with(None)
    }

    /// Load configuration, reading `path` instead of `./cuecard.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is missing or any source cannot be parsed.
    #[instrument]
    pub fn load_with(path: Option<&Path>) -> CuecardResult<Self> {
        debug!("Loading configuration with precedence: env > file > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/cuecard/cuecard.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name("cuecard").required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("CUECARD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config
            .apply_port_override(std::env::var("PORT").ok().as_deref())
            .validated()
    }

    /// Parse configuration from TOML text alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration.
    pub fn from_toml_str(toml: &str) -> CuecardResult<Self> {
        let config: Self = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        config.validated()
    }

    /// The bundled defaults.
    ///
    /// # Errors
    ///
    /// Only fails if the shipped defaults are broken.
    pub fn bundled() -> CuecardResult<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Apply a `PORT`-style override. Unparseable values are ignored.
    pub fn apply_port_override(mut self, port: Option<&str>) -> Self {
        if let Some(raw) = port {
            match raw.trim().parse::<u16>() {
                Ok(port) => self.server = self.server.with_port(port),
                Err(e) => warn!(value = raw, error = %e, "Ignoring invalid PORT"),
            }
        }
        self
    }

    /// Replace the generation settings.
    pub fn with_generation(mut self, generation: GeneratorConfig) -> Self {
        self.generation = generation;
        self
    }

    /// Replace the Gemini client settings.
    pub fn with_gemini(mut self, gemini: GeminiConfig) -> Self {
        self.gemini = gemini;
        self
    }

    /// Replace the server settings.
    pub fn with_server(mut self, server: ServerConfig) -> Self {
        self.server = server;
        self
    }

    fn validated(self) -> CuecardResult<Self> {
        self.generation.validate()?;
        Ok(self)
    }
}

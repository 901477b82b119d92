//! Google Gemini API implementation.
//!
//! The client talks to the `generateContent` REST endpoint directly and hands
//! the response envelope back untouched: deciding whether the envelope holds
//! a usable payload is the caller's job, so a 200 with no text is not an
//! error here.
//!
//! # Example
//!
//! ```no_run
//! use cuecard_models::{GeminiClient, GeminiConfig};
//! use cuecard_core::GenerateRequest;
//! use cuecard_interface::ModelDriver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeminiConfig::builder().api_key("my-key").build()?;
//! let client = GeminiClient::from_config(&config)?;
//!
//! let request = GenerateRequest::builder()
//!     .prompt("Name three noble gases")
//!     .model("gemini-2.5-pro")
//!     .build()?;
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::env;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use cuecard_core::{GenerateRequest, GenerateResponse};
use cuecard_error::{CuecardResult, GeminiError, GeminiErrorKind};
use cuecard_interface::ModelDriver;

use super::GeminiResult;
use super::config::GeminiConfig;
use super::dto::{ErrorWrapper, GenerateContentRequest, ListModelsResponse, ModelInfo};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Google Gemini REST API.
///
/// Holds one pooled `reqwest::Client`; cloning is cheap and clones share the
/// connection pool. Safe to share across concurrent requests.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    base_url: String,
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client with default settings.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cuecard_models::GeminiClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeminiClient::new()?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> CuecardResult<Self> {
        Self::from_config(&GeminiConfig::default())
    }

    /// Create a client from configuration.
    ///
    /// An explicit `api_key` wins over `GEMINI_API_KEY`.
    #[instrument(name = "gemini_client_from_config", skip_all, fields(model = %config.model()))]
    pub fn from_config(config: &GeminiConfig) -> CuecardResult<Self> {
        Self::new_internal(config).map_err(Into::into)
    }

    fn new_internal(config: &GeminiConfig) -> GeminiResult<Self> {
        let api_key = match config.api_key() {
            Some(key) if !key.trim().is_empty() => key.clone(),
            _ => env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey))?,
        };

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs() {
            builder = builder.timeout(Duration::from_secs(*secs));
        }
        let http = builder
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            http,
            api_key,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            model_name: config.model().clone(),
        })
    }

    /// Strip a leading `models/` so both `gemini-2.5-flash` and
    /// `models/gemini-2.5-flash` address the same endpoint.
    fn model_path(model: &str) -> &str {
        model.strip_prefix("models/").unwrap_or(model)
    }

    #[instrument(skip(self, req), fields(model = tracing::field::Empty))]
    async fn generate_internal(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let model = Self::model_path(req.model().as_deref().unwrap_or(&self.model_name));
        tracing::Span::current().record("model", model);

        let url = format!("{}/{}:generateContent", self.base_url, model);
        let body = GenerateContentRequest::user_text(req.prompt());

        debug!(prompt_len = req.prompt().len(), "Sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.without_url().to_string())))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.without_url().to_string())))?;

        if !status.is_success() {
            let err = Self::parse_gemini_error(status, &text);
            warn!(
                status = status.as_u16(),
                transient = err.kind.is_transient(),
                error = %err.kind,
                "Gemini returned an error status"
            );
            return Err(err);
        }

        let envelope: GenerateResponse = serde_json::from_str(&text)
            .map_err(|e| GeminiError::new(GeminiErrorKind::Decode(e.to_string())))?;

        debug!(
            candidates = envelope.candidates.len(),
            finish_reason = envelope.finish_reason().unwrap_or("none"),
            "Received generateContent response"
        );

        Ok(envelope)
    }

    /// List the models available to this API key.
    ///
    /// Follows `nextPageToken` until the provider stops returning one.
    #[instrument(skip(self))]
    pub async fn list_models(&self) -> CuecardResult<Vec<ModelInfo>> {
        self.list_models_internal().await.map_err(Into::into)
    }

    async fn list_models_internal(&self) -> GeminiResult<Vec<ModelInfo>> {
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .http
                .get(&self.base_url)
                .header(API_KEY_HEADER, &self.api_key);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }

            let response = request.send().await.map_err(|e| {
                GeminiError::new(GeminiErrorKind::ApiRequest(e.without_url().to_string()))
            })?;
            let status = response.status();
            let text = response.text().await.map_err(|e| {
                GeminiError::new(GeminiErrorKind::ApiRequest(e.without_url().to_string()))
            })?;

            if !status.is_success() {
                return Err(Self::parse_gemini_error(status, &text));
            }

            let page: ListModelsResponse = serde_json::from_str(&text)
                .map_err(|e| GeminiError::new(GeminiErrorKind::Decode(e.to_string())))?;
            models.extend(page.models);

            match page.next_page_token.filter(|token| !token.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(count = models.len(), "Listed Gemini models");
        Ok(models)
    }

    /// Turn a non-2xx response into a structured error.
    ///
    /// Prefers the provider's `{"error": {"status", "message"}}` body and falls
    /// back to the raw body text.
    fn parse_gemini_error(status: StatusCode, body: &str) -> GeminiError {
        let message = serde_json::from_str::<ErrorWrapper>(body)
            .ok()
            .map(|wrapper| {
                let msg = wrapper.error.message.unwrap_or_else(|| body.to_string());
                match wrapper.error.status {
                    Some(status_text) if !status_text.is_empty() => {
                        format!("{}: {}", status_text, msg)
                    }
                    _ => msg,
                }
            })
            .unwrap_or_else(|| body.to_string());

        GeminiError::new(GeminiErrorKind::HttpError {
            status_code: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ModelDriver for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> CuecardResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

//! HTTP routes.
//!
//! - `GET /health` reports liveness.
//! - `POST /generate-flashcards` takes `{"topic": "..."}` and returns
//!   `{"flashcards": [...]}`.
//!
//! Failures never echo provider text: a 500 carries only the terminal
//! error's short description.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use cuecard_core::{FlashcardSet, Topic};
use cuecard_generation::FlashcardGenerator;
use cuecard_interface::ModelDriver;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Driver type the router works with.
pub type SharedDriver = Arc<dyn ModelDriver>;

/// Shared state for route handlers.
#[derive(Clone)]
pub struct AppState {
    generator: Arc<FlashcardGenerator<SharedDriver>>,
    request_timeout: Option<Duration>,
}

impl AppState {
    /// Create state around a generator.
    pub fn new(generator: FlashcardGenerator<SharedDriver>) -> Self {
        Self {
            generator: Arc::new(generator),
            request_timeout: None,
        }
    }

    /// Cancel generation after `timeout`.
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Body of `POST /generate-flashcards`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateFlashcardsRequest {
    /// Subject to generate cards about
    #[serde(default)]
    pub topic: Option<String>,
}

/// Successful response of `POST /generate-flashcards`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateFlashcardsResponse {
    /// The 15 cards, in model order
    pub flashcards: FlashcardSet,
}

/// Error responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Topic missing or blank
    TopicRequired,
    /// Generation ended without a set
    GenerationFailed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::TopicRequired => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Topic is required"})),
            )
                .into_response(),
            ApiError::GenerationFailed(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to generate flashcards",
                    "details": details,
                })),
            )
                .into_response(),
        }
    }
}

/// Build the application router with permissive CORS.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/generate-flashcards", post(generate_flashcards))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Parse the topic out of a raw body.
///
/// Anything that is not an object with a non-blank string `topic` counts as
/// a missing topic.
fn topic_from_body(body: &[u8]) -> Result<Topic, ApiError> {
    let raw = serde_json::from_slice::<GenerateFlashcardsRequest>(body)
        .ok()
        .and_then(|request| request.topic)
        .ok_or(ApiError::TopicRequired)?;

    Topic::new(raw).map_err(|_| ApiError::TopicRequired)
}

async fn generate_flashcards(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateFlashcardsResponse>, ApiError> {
    let topic = topic_from_body(&body)?;
    info!(topic = %topic, "Generating flashcards");

    let cancel = CancellationToken::new();
    let deadline = state.request_timeout.map(|timeout| {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            cancel.cancel();
        })
    });

    let result = state
        .generator
        .generate_with_cancellation(&topic, cancel)
        .await;

    if let Some(handle) = deadline {
        handle.abort();
    }

    match result {
        Ok(flashcards) => Ok(Json(GenerateFlashcardsResponse { flashcards })),
        Err(err) => {
            error!(topic = %topic, error = %err, "Error generating flashcards");
            Err(ApiError::GenerationFailed(err.kind.to_string()))
        }
    }
}

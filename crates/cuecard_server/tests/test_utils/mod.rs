//! Test utilities for HTTP tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use cuecard_core::{GenerateRequest, GenerateResponse, GeneratorConfig};
use cuecard_error::{CuecardError, CuecardResult, GeminiError, GeminiErrorKind};
use cuecard_interface::ModelDriver;
use cuecard_server::{CuecardConfig, ServerConfig, SharedDriver, create_router, state_for};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// How the mock answers every call.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return this text
    Text(String),
    /// Fail with this provider error
    Error(GeminiErrorKind),
    /// Never answer
    Hang,
}

/// Driver that answers every call the same way and counts calls.
#[derive(Debug)]
pub struct MockDriver {
    behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockDriver {
    pub fn new(behavior: MockBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelDriver for MockDriver {
    async fn generate(&self, _req: &GenerateRequest) -> CuecardResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Text(text) => Ok(GenerateResponse::from_text(text.clone())),
            MockBehavior::Error(kind) => Err(CuecardError::from(GeminiError::new(kind.clone()))),
            MockBehavior::Hang => std::future::pending::<CuecardResult<GenerateResponse>>().await,
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Router over `driver` with the given attempt budget and request deadline.
pub fn router(driver: Arc<MockDriver>, max_attempts: usize, timeout_secs: Option<u64>) -> Router {
    let config = CuecardConfig::default()
        .with_generation(GeneratorConfig::default().with_max_attempts(max_attempts))
        .with_server(ServerConfig::default().with_request_timeout(timeout_secs));
    let driver: SharedDriver = driver;
    create_router(state_for(driver, &config).expect("valid state"))
}

/// A valid 15-card payload as text.
pub fn valid_payload() -> String {
    let mut cards = Vec::new();
    for difficulty in ["easy", "medium", "hard"] {
        for i in 0..5 {
            cards.push(json!({
                "question": format!("{difficulty} question {i}"),
                "answer": format!("{difficulty} answer {i}"),
                "difficulty": difficulty,
            }));
        }
    }
    Value::Array(cards).to_string()
}

//! Test utilities for generation tests.
//!
//! Provides a scripted model driver and payload builders.

#![allow(dead_code)]

use async_trait::async_trait;
use cuecard_core::{GenerateRequest, GenerateResponse};
use cuecard_error::{CuecardError, CuecardResult, GeminiError, GeminiErrorKind};
use cuecard_interface::ModelDriver;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// A single scripted driver reply.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Respond with one candidate carrying this text
    Text(String),
    /// Respond with an envelope that has no candidates
    Empty,
    /// Fail the call with this provider error
    Error(GeminiErrorKind),
    /// Never respond
    Hang,
}

/// Model driver that replays a fixed sequence of replies.
///
/// Calls past the end of the sequence repeat the last reply. Clones share
/// the call log.
#[derive(Debug, Clone)]
pub struct MockDriver {
    responses: Arc<Vec<MockResponse>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockDriver {
    /// A driver that replays `responses` in order.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self {
            responses: Arc::new(responses),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A driver that always returns `text`.
    pub fn new_text(text: impl Into<String>) -> Self {
        Self::new_sequence(vec![MockResponse::Text(text.into())])
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> CuecardResult<GenerateResponse> {
        let index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req.clone());
            requests.len() - 1
        };

        let reply = self
            .responses
            .get(index)
            .or_else(|| self.responses.last())
            .cloned()
            .unwrap_or(MockResponse::Empty);

        match reply {
            MockResponse::Text(text) => Ok(GenerateResponse::from_text(text)),
            MockResponse::Empty => Ok(GenerateResponse::default()),
            MockResponse::Error(kind) => Err(CuecardError::from(GeminiError::new(kind))),
            MockResponse::Hang => std::future::pending::<CuecardResult<GenerateResponse>>().await,
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// A JSON array of cards with the given difficulty counts.
pub fn cards_json(easy: usize, medium: usize, hard: usize) -> Value {
    let mut cards = Vec::new();
    for (difficulty, n) in [("easy", easy), ("medium", medium), ("hard", hard)] {
        for i in 0..n {
            cards.push(json!({
                "question": format!("{difficulty} question {i}"),
                "answer": format!("{difficulty} answer {i}"),
                "difficulty": difficulty,
            }));
        }
    }
    Value::Array(cards)
}

/// A valid 15-card payload as text.
pub fn valid_payload() -> String {
    cards_json(5, 5, 5).to_string()
}

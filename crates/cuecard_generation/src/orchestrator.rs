//! The retrying flashcard generator.
//!
//! Each call runs a small state machine:
//!
//! ```text
//! Attempting(1) --ok--> Success
//!      |
//!    fail (k < max) --> Attempting(k + 1)
//!    fail (k = max) --> Exhausted
//! ```
//!
//! Cancellation is checked before each attempt and raced against the model
//! call while it is in flight. Every failure kind is retried the same way.

use cuecard_core::{FlashcardSet, GenerateRequest, GeneratorConfig, Topic};
use cuecard_error::{CuecardResult, GenerationError, GenerationErrorKind, GenerationResult};
use cuecard_interface::ModelDriver;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use crate::prompt::build_prompt;
use crate::validate::{extract_payload, parse_flashcards};

/// Why one attempt failed.
///
/// Only ever logged; callers of the generator see the terminal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptFailure {
    /// One-based attempt number
    pub attempt: usize,
    /// What went wrong
    pub reason: GenerationErrorKind,
}

impl std::fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Attempt {} failed: {}", self.attempt, self.reason)
    }
}

#[derive(Debug)]
enum AttemptState {
    Attempting(usize),
    Success(FlashcardSet),
    Exhausted,
}

impl AttemptState {
    fn advance(self, outcome: Result<FlashcardSet, AttemptFailure>, max_attempts: usize) -> Self {
        match (self, outcome) {
            (AttemptState::Attempting(_), Ok(set)) => AttemptState::Success(set),
            (AttemptState::Attempting(k), Err(_)) if k < max_attempts => {
                AttemptState::Attempting(k + 1)
            }
            (AttemptState::Attempting(_), Err(_)) => AttemptState::Exhausted,
            (done, _) => done,
        }
    }
}

/// Generates validated flashcard sets through a [`ModelDriver`].
///
/// Attempts within one call are strictly sequential. Separate calls share
/// nothing but the driver, so one generator can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct FlashcardGenerator<D> {
    driver: D,
    config: GeneratorConfig,
}

impl<D: ModelDriver> FlashcardGenerator<D> {
    /// Create a generator.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config.max_attempts()` is zero.
    #[track_caller]
    pub fn new(driver: D, config: GeneratorConfig) -> CuecardResult<Self> {
        config.validate()?;
        Ok(Self { driver, config })
    }

    /// The configuration this generator was built with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Generate a flashcard set for `topic`.
    ///
    /// # Errors
    ///
    /// [`GenerationErrorKind::AttemptsExhausted`] when every attempt failed.
    pub async fn generate(&self, topic: &Topic) -> GenerationResult<FlashcardSet> {
        self.generate_with_cancellation(topic, CancellationToken::new())
            .await
    }

    /// Generate a flashcard set for `topic`, stopping early once `cancel` fires.
    ///
    /// A token that is already cancelled results in no model call at all. A
    /// cancellation that arrives mid-call abandons that call.
    ///
    /// # Errors
    ///
    /// [`GenerationErrorKind::Cancelled`] when the token fired, or
    /// [`GenerationErrorKind::AttemptsExhausted`] when every attempt failed.
    #[instrument(
        skip(self, topic, cancel),
        fields(
            topic = %topic,
            provider = self.driver.provider_name(),
            max_attempts = self.config.max_attempts()
        )
    )]
    pub async fn generate_with_cancellation(
        &self,
        topic: &Topic,
        cancel: CancellationToken,
    ) -> GenerationResult<FlashcardSet> {
        let max_attempts = *self.config.max_attempts();
        let request = self.request_for(topic);
        let mut state = AttemptState::Attempting(1);

        loop {
            match state {
                AttemptState::Attempting(attempt) => {
                    if cancel.is_cancelled() {
                        info!(attempt, "Generation cancelled before attempt");
                        return Err(GenerationError::new(GenerationErrorKind::Cancelled));
                    }

                    let outcome = tokio::select! {
                        biased;
                        _ = cancel.cancelled() => {
                            info!(attempt, "Generation cancelled during attempt");
                            return Err(GenerationError::new(GenerationErrorKind::Cancelled));
                        }
                        outcome = self.attempt(attempt, &request) => outcome,
                    };

                    match &outcome {
                        Ok(_) => debug!(attempt, "Attempt produced a valid set"),
                        Err(failure) => warn!(
                            attempt = failure.attempt,
                            max_attempts,
                            reason = %failure.reason,
                            "Attempt failed"
                        ),
                    }

                    state = AttemptState::Attempting(attempt).advance(outcome, max_attempts);
                }
                AttemptState::Success(set) => {
                    info!(cards = set.len(), "Generated flashcard set");
                    return Ok(set);
                }
                AttemptState::Exhausted => {
                    error!(attempts = max_attempts, "All generation attempts failed");
                    return Err(GenerationError::new(
                        GenerationErrorKind::AttemptsExhausted {
                            attempts: max_attempts,
                        },
                    ));
                }
            }
        }
    }

    fn request_for(&self, topic: &Topic) -> GenerateRequest {
        GenerateRequest::new(build_prompt(topic)).with_model(self.config.model().clone())
    }

    async fn attempt(
        &self,
        attempt: usize,
        request: &GenerateRequest,
    ) -> Result<FlashcardSet, AttemptFailure> {
        let fail = |reason: GenerationErrorKind| AttemptFailure { attempt, reason };

        let response = self
            .driver
            .generate(request)
            .await
            .map_err(|e| fail(GenerationErrorKind::Transport(e.to_string())))?;

        if let Some(reason) = response.finish_reason() {
            debug!(attempt, finish_reason = reason, "Model finished");
        }

        let payload = extract_payload(&response).map_err(fail)?;
        parse_flashcards(payload).map_err(fail)
    }
}

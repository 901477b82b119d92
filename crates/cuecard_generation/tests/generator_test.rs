// Tests for FlashcardGenerator driven by a scripted model.

mod test_utils;

use cuecard_core::{Difficulty, GeneratorConfig, Topic};
use cuecard_error::{GeminiErrorKind, GenerationErrorKind};
use cuecard_generation::FlashcardGenerator;
use std::time::Duration;
use test_utils::{MockDriver, MockResponse, cards_json, valid_payload};
use tokio_util::sync::CancellationToken;

fn generator(driver: &MockDriver, max_attempts: usize) -> FlashcardGenerator<MockDriver> {
    let config = GeneratorConfig::default().with_max_attempts(max_attempts);
    FlashcardGenerator::new(driver.clone(), config).expect("valid config")
}

#[tokio::test]
async fn test_valid_payload_on_first_attempt() -> anyhow::Result<()> {
    let driver = MockDriver::new_text(valid_payload());
    let topic = Topic::new("Photosynthesis")?;

    let set = generator(&driver, 3).generate(&topic).await?;

    assert_eq!(set.len(), 15);
    assert_eq!(set.count(Difficulty::Easy), 5);
    assert_eq!(set.count(Difficulty::Medium), 5);
    assert_eq!(set.count(Difficulty::Hard), 5);
    assert!(set.iter().all(|c| !c.question.is_empty() && !c.answer.is_empty()));
    assert_eq!(driver.call_count(), 1);

    let prompt = driver.requests()[0].prompt().clone();
    assert!(prompt.contains("\"Photosynthesis\""));
    Ok(())
}

#[tokio::test]
async fn test_fenced_payload_is_sanitized() -> anyhow::Result<()> {
    let fenced = format!("```json\n{}\n```", valid_payload());
    let driver = MockDriver::new_text(fenced);

    let set = generator(&driver, 3)
        .generate(&Topic::new("Photosynthesis")?)
        .await?;

    assert_eq!(set.len(), 15);
    assert_eq!(driver.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_short_sets_are_retried_until_valid() -> anyhow::Result<()> {
    let fourteen = cards_json(5, 5, 4).to_string();
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Text(fourteen.clone()),
        MockResponse::Text(fourteen),
        MockResponse::Text(valid_payload()),
    ]);

    let set = generator(&driver, 3)
        .generate(&Topic::new("Photosynthesis")?)
        .await?;

    assert_eq!(set.len(), 15);
    assert_eq!(driver.call_count(), 3);
    Ok(())
}

#[tokio::test]
async fn test_malformed_payloads_exhaust_attempts() -> anyhow::Result<()> {
    let driver = MockDriver::new_text("Sure! Here are some flashcards: ...");

    let err = generator(&driver, 3)
        .generate(&Topic::new("Photosynthesis")?)
        .await
        .unwrap_err();

    assert_eq!(err.kind, GenerationErrorKind::AttemptsExhausted { attempts: 3 });
    assert_eq!(err.kind.to_string(), "Max retries exceeded");
    assert_eq!(driver.call_count(), 3);
    Ok(())
}

#[tokio::test]
async fn test_empty_topic_never_reaches_the_model() {
    let driver = MockDriver::new_text(valid_payload());
    let _generator = generator(&driver, 3);

    let err = Topic::new("").unwrap_err();

    assert_eq!(err.kind, GenerationErrorKind::EmptyTopic);
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn test_success_stops_further_calls() -> anyhow::Result<()> {
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Empty,
        MockResponse::Text(valid_payload()),
        MockResponse::Text("never requested".to_string()),
    ]);

    generator(&driver, 5)
        .generate(&Topic::new("Rust")?)
        .await?;

    assert_eq!(driver.call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_every_failure_kind_is_retried() -> anyhow::Result<()> {
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Error(GeminiErrorKind::HttpError {
            status_code: 503,
            message: "UNAVAILABLE".to_string(),
        }),
        MockResponse::Empty,
        MockResponse::Text("not json".to_string()),
        MockResponse::Text(cards_json(7, 4, 4).to_string()),
        MockResponse::Text(valid_payload()),
    ]);

    let set = generator(&driver, 5)
        .generate(&Topic::new("Rust")?)
        .await?;

    assert_eq!(set.len(), 15);
    assert_eq!(driver.call_count(), 5);
    Ok(())
}

#[tokio::test]
async fn test_transport_errors_exhaust_attempts() -> anyhow::Result<()> {
    let driver = MockDriver::new_sequence(vec![MockResponse::Error(
        GeminiErrorKind::ApiRequest("connection reset".to_string()),
    )]);

    let err = generator(&driver, 2)
        .generate(&Topic::new("Rust")?)
        .await
        .unwrap_err();

    assert_eq!(err.kind, GenerationErrorKind::AttemptsExhausted { attempts: 2 });
    assert_eq!(driver.call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_single_attempt_budget() -> anyhow::Result<()> {
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Empty,
        MockResponse::Text(valid_payload()),
    ]);

    let err = generator(&driver, 1)
        .generate(&Topic::new("Rust")?)
        .await
        .unwrap_err();

    assert_eq!(err.kind, GenerationErrorKind::AttemptsExhausted { attempts: 1 });
    assert_eq!(driver.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_zero_attempts_is_rejected() {
    let driver = MockDriver::new_text(valid_payload());
    let config = GeneratorConfig::default().with_max_attempts(0);

    assert!(FlashcardGenerator::new(driver.clone(), config).is_err());
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn test_cancelled_token_makes_no_calls() -> anyhow::Result<()> {
    let driver = MockDriver::new_text(valid_payload());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = generator(&driver, 3)
        .generate_with_cancellation(&Topic::new("Rust")?, cancel)
        .await
        .unwrap_err();

    assert_eq!(err.kind, GenerationErrorKind::Cancelled);
    assert_eq!(driver.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_cancellation_interrupts_inflight_call() -> anyhow::Result<()> {
    let driver = MockDriver::new_sequence(vec![MockResponse::Hang]);
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let err = generator(&driver, 3)
        .generate_with_cancellation(&Topic::new("Rust")?, cancel)
        .await
        .unwrap_err();

    assert_eq!(err.kind, GenerationErrorKind::Cancelled);
    assert_eq!(driver.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_configured_model_is_forwarded() -> anyhow::Result<()> {
    let driver = MockDriver::new_text(valid_payload());
    let config = GeneratorConfig::builder()
        .max_attempts(2usize)
        .model("gemini-2.5-pro")
        .build()?;

    FlashcardGenerator::new(driver.clone(), config)?
        .generate(&Topic::new("Rust")?)
        .await?;

    assert_eq!(
        driver.requests()[0].model().as_deref(),
        Some("gemini-2.5-pro")
    );
    Ok(())
}

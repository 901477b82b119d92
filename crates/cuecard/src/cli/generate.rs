//! `cuecard generate`.

use cuecard::{CuecardConfig, CuecardResult, FlashcardGenerator, GeminiClient, JsonError, Topic};
use tracing::info;

/// Generate one set for `topic` and print it as pretty JSON.
pub async fn run_generate(
    config: &CuecardConfig,
    topic: &str,
    max_attempts: Option<usize>,
    model: Option<String>,
) -> CuecardResult<()> {
    let topic = Topic::new(topic)?;

    let mut generation = config.generation().clone();
    if let Some(max_attempts) = max_attempts {
        generation = generation.with_max_attempts(max_attempts);
    }
    if let Some(model) = model {
        generation = generation.with_model(Some(model));
    }

    let client = GeminiClient::from_config(config.gemini())?;
    let generator = FlashcardGenerator::new(client, generation)?;

    let set = generator.generate(&topic).await?;
    info!(topic = %topic, cards = set.len(), "Generated flashcards");

    let json = serde_json::to_string_pretty(&set).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

//! `cuecard models`.

use cuecard::{CuecardConfig, CuecardResult, GeminiClient};

/// Print the models visible to the configured key.
pub async fn list_models(config: &CuecardConfig, all: bool) -> CuecardResult<()> {
    let client = GeminiClient::from_config(config.gemini())?;
    let models = client.list_models().await?;

    for model in models
        .iter()
        .filter(|m| all || m.supports_generate_content())
    {
        match model.display_name.as_deref() {
            Some(name) => println!("{:<40} {}", model.id(), name),
            None => println!("{}", model.id()),
        }
    }
    Ok(())
}

//! Cuecard CLI binary.
//!
//! - Serve the flashcard HTTP API
//! - Generate a single set from the terminal
//! - List the models the configured key can use

use clap::Parser;
use cuecard::CuecardConfig;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, list_models, run_generate, run_server};

    // Pick up GEMINI_API_KEY and PORT from .env when present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // RUST_LOG is honored unless --verbose asks for everything
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = CuecardConfig::load_with(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { port } => {
            run_server(config, port).await?;
        }

        Commands::Generate {
            topic,
            max_attempts,
            model,
        } => {
            run_generate(&config, &topic, max_attempts, model).await?;
        }

        Commands::Models { all } => {
            list_models(&config, all).await?;
        }
    }

    Ok(())
}

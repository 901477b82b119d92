//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cuecard - generate balanced flashcard sets with Gemini
#[derive(Parser, Debug)]
#[command(name = "cuecard")]
#[command(about = "Generate balanced flashcard sets with Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file to read instead of ./cuecard.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Port to listen on (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate one flashcard set and print it as JSON
    Generate {
        /// Topic to generate cards about
        topic: String,

        /// Model calls before giving up
        #[arg(long)]
        max_attempts: Option<usize>,

        /// Model to use instead of the configured one
        #[arg(long)]
        model: Option<String>,
    },

    /// List models available to the configured API key
    Models {
        /// Include models that cannot generate content
        #[arg(long)]
        all: bool,
    },
}

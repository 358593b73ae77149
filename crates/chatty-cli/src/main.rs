//! chatty CLI - ask a hosted language model one question
//!
//! Usage:
//!     chatty [OPTIONS] [PROMPT]
//!
//! Environment Variables:
//!     CHATTY_MODEL: Model name (default: gpt-4o)
//!     OPENAI_API_BASE: Model API base URL (default: https://api.openai.com/v1)
//!     OPENAI_API_KEY: API key, or the provider-specific key for known base URLs
//!     RUST_LOG: Log filter for stderr output (default: warn)

use anyhow::{Context, Result};
use chatty::{ChatOptions, ClientConfig, Invoker, OpenAiClient, DEFAULT_MODEL, DEFAULT_PROMPT};
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

/// Ask a hosted language model one question and print the answer
#[derive(Parser, Debug)]
#[command(name = "chatty")]
#[command(about = "Ask a hosted language model one question and print the answer")]
#[command(after_help = r#"Examples:
    # Ask the default question
    chatty

    # Ask something else
    chatty "Why is C++ so hard to parse?"

    # Use another model and provider
    OPENAI_API_BASE=https://api.groq.com/openai/v1 chatty --model llama-3.3-70b-versatile
"#)]
struct Cli {
    /// Model name
    #[arg(long, env = "CHATTY_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Model API base URL
    #[arg(long, env = "OPENAI_API_BASE")]
    base_url: Option<String>,

    /// Sampling temperature (0.0 to 2.0)
    #[arg(long)]
    temperature: Option<f32>,

    /// Nucleus sampling probability mass (0.0 to 1.0)
    #[arg(long)]
    top_p: Option<f32>,

    /// Text of the single user turn
    #[arg(default_value = DEFAULT_PROMPT)]
    prompt: String,
}

impl Cli {
    fn options(&self) -> ChatOptions {
        ChatOptions {
            temperature: self.temperature,
            top_p: self.top_p,
        }
    }
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing();

    let config = ClientConfig::from_env(args.model.as_str(), args.base_url.clone())
        .context("Failed to configure model client")?;

    tracing::debug!("Using {} at {}", config.model, config.base_url);

    let invoker = Invoker::new(args.prompt.as_str()).with_options(args.options());
    let mut stdout = io::stdout().lock();

    invoker
        .invoke(
            &config,
            |config| Ok(OpenAiClient::new(config.clone())),
            &mut stdout,
        )
        .await
        .context("Chat request failed")?;

    Ok(())
}

//! chatty: ask a hosted language model one question
//!
//! This library provides:
//! - Chat messages and the request/response pair sent to the model
//! - Client configuration with API key lookup for OpenAI-compatible providers
//! - An OpenAI-compatible client built on async-openai
//! - The `Invoker` that sends a single user turn and prints the reply
//!
//! # Example
//!
//! ```no_run
//! use chatty::{ClientConfig, Invoker, OpenAiClient, DEFAULT_MODEL};
//!
//! #[tokio::main]
//! async fn main() -> chatty::Result<()> {
//!     let config = ClientConfig::from_env(DEFAULT_MODEL, None)?;
//!     let mut stdout = std::io::stdout();
//!
//!     Invoker::new("What is the C++ FQA?")
//!         .invoke(&config, |config| Ok(OpenAiClient::new(config.clone())), &mut stdout)
//!         .await
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod invoker;
pub mod message;

pub use error::{ChatError, Result};

pub use config::{
    api_key_env, ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_PROMPT, PROVIDER_KEYS,
};

pub use client::{build_request, into_chat_response, ChatClient, OpenAiClient};

pub use invoker::Invoker;

pub use message::{ChatMessage, ChatOptions, ChatRequest, ChatResponse, Role};

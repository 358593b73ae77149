//! Configuration module for chatty
//!
//! This module contains:
//! - `client`: Endpoint, credentials and model the client is bound to
//! - `provider`: API key lookup for known OpenAI-compatible providers

mod client;
mod provider;

pub use client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_PROMPT};
pub use provider::{api_key_env, PROVIDER_KEYS};

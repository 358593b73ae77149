//! Client configuration resolved from flags and the environment

use std::env;

use super::provider::api_key_env;
use crate::error::{ChatError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_PROMPT: &str = "What is the C++ FQA?";

/// Endpoint, credentials and model a client is bound to
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl ClientConfig {
    /// Create a new ClientConfig with explicit settings
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Resolve a config with `lookup` standing in for the environment.
    ///
    /// The base URL is `base_url` if given, else `OPENAI_API_BASE`, else the
    /// OpenAI endpoint. The API key variable depends on the resolved base URL.
    pub fn resolve<F>(model: impl Into<String>, base_url: Option<String>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = base_url
            .or_else(|| lookup("OPENAI_API_BASE"))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let var = api_key_env(&base_url);
        let api_key = lookup(var).ok_or(ChatError::MissingApiKey { var })?;

        Ok(Self {
            base_url,
            api_key,
            model: model.into(),
        })
    }

    /// Resolve a config from the process environment
    pub fn from_env(model: impl Into<String>, base_url: Option<String>) -> Result<Self> {
        Self::resolve(model, base_url, |name| env::var(name).ok())
    }
}

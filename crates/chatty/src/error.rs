//! Error types for chat requests

use async_openai::error::OpenAIError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("API key not found: set the {var} environment variable")]
    MissingApiKey { var: &'static str },

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Request failed: {0}")]
    Request(#[from] OpenAIError),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChatError>;

//! Chat client module
//!
//! This module provides:
//! - `ChatClient`: the seam the invoker talks to
//! - `openai`: OpenAI-compatible client backed by async-openai

mod openai;

use futures::future::BoxFuture;

use crate::error::Result;
use crate::message::{ChatRequest, ChatResponse};

pub use openai::{build_request, into_chat_response, OpenAiClient};

/// A client bound to one hosted model that answers chat requests
pub trait ChatClient: Send + Sync {
    /// Model identifier the client was constructed with
    fn model(&self) -> &str;

    /// Send one request and wait for the single response
    fn chat<'a>(&'a self, request: &'a ChatRequest) -> BoxFuture<'a, Result<ChatResponse>>;
}

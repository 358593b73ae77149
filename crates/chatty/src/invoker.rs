//! Invoker: ask a hosted model one question and print the answer

use std::io::Write;
use tracing::debug;

use crate::client::ChatClient;
use crate::config::{ClientConfig, DEFAULT_PROMPT};
use crate::error::Result;
use crate::message::{ChatMessage, ChatOptions, ChatRequest};

/// Sends a single user turn and writes the reply text
#[derive(Debug, Clone, PartialEq)]
pub struct Invoker {
    pub prompt: String,
    pub options: ChatOptions,
}

impl Default for Invoker {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            options: ChatOptions::default(),
        }
    }
}

impl Invoker {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_options(mut self, options: ChatOptions) -> Self {
        self.options = options;
        self
    }

    /// The request sent to `model`: exactly one user message holding the prompt
    pub fn request(&self, model: &str) -> ChatRequest {
        ChatRequest::new(model, vec![ChatMessage::user(self.prompt.as_str())])
            .with_options(self.options)
    }

    /// Send the request through `client` and write the reply followed by a newline.
    ///
    /// Nothing is written to `out` unless the request succeeds.
    pub async fn run<C, W>(&self, client: &C, out: &mut W) -> Result<()>
    where
        C: ChatClient + ?Sized,
        W: Write,
    {
        let request = self.request(client.model());
        debug!(
            "Asking {} as {}: {}",
            request.model,
            request.messages[0].role,
            serde_json::to_string(&request).unwrap_or_default()
        );

        let response = client.chat(&request).await?;

        writeln!(out, "{}", response.message.content)?;
        out.flush()?;
        Ok(())
    }

    /// Construct the client from `config` once, then [`run`](Self::run) it
    pub async fn invoke<C, F, W>(&self, config: &ClientConfig, connect: F, out: &mut W) -> Result<()>
    where
        C: ChatClient,
        F: FnOnce(&ClientConfig) -> Result<C>,
        W: Write,
    {
        let client = connect(config)?;
        self.run(&client, out).await
    }
}

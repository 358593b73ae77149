//! Chat client for OpenAI-compatible APIs

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
        CreateChatCompletionResponse, Role as OpenAiRole,
    },
    Client,
};
use futures::future::{BoxFuture, FutureExt};
use std::time::Instant;
use tracing::{debug, info};

use super::ChatClient;
use crate::config::ClientConfig;
use crate::error::{ChatError, Result};
use crate::message::{ChatMessage, ChatRequest, ChatResponse, Role};

/// Client for interacting with OpenAI-compatible chat models
pub struct OpenAiClient {
    config: ClientConfig,
    client: Client<OpenAIConfig>,
}

impl OpenAiClient {
    /// Create a new OpenAiClient
    pub fn new(config: ClientConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(&config.base_url)
            .with_api_key(&config.api_key);

        let client = Client::with_config(openai_config);

        Self { config, client }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let start_time = Instant::now();
        let request = build_request(request)?;

        debug!(
            "Sending chat completion to {} (model: {}, messages: {})",
            self.config.base_url,
            request.model,
            request.messages.len()
        );

        let response = self.client.chat().create(request).await?;

        info!(
            "Chat completion finished in {:.3}s",
            start_time.elapsed().as_secs_f64()
        );

        into_chat_response(response)
    }
}

impl ChatClient for OpenAiClient {
    fn model(&self) -> &str {
        &self.config.model
    }

    fn chat<'a>(&'a self, request: &'a ChatRequest) -> BoxFuture<'a, Result<ChatResponse>> {
        self.send(request).boxed()
    }
}

/// Convert a validated request into the async-openai request type
pub fn build_request(request: &ChatRequest) -> Result<CreateChatCompletionRequest> {
    request.validate()?;

    let messages = request
        .messages
        .iter()
        .map(to_openai_message)
        .collect::<Result<Vec<_>>>()?;

    let mut args = CreateChatCompletionRequestArgs::default();
    args.model(&request.model).messages(messages);

    if let Some(temperature) = request.options.temperature {
        args.temperature(temperature);
    }
    if let Some(top_p) = request.options.top_p {
        args.top_p(top_p);
    }

    Ok(args.build()?)
}

fn to_openai_message(message: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
    let converted: ChatCompletionRequestMessage = match message.role {
        Role::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(message.content.clone())
            .build()?
            .into(),
        Role::User => ChatCompletionRequestUserMessageArgs::default()
            .content(message.content.clone())
            .build()?
            .into(),
        Role::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(message.content.clone())
            .build()?
            .into(),
        Role::Tool => {
            return Err(ChatError::InvalidOptions(
                "tool messages require a tool call id and cannot be sent".to_string(),
            ))
        }
    };

    Ok(converted)
}

/// Take the first choice of a completion as the reply
pub fn into_chat_response(response: CreateChatCompletionResponse) -> Result<ChatResponse> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ChatError::MalformedResponse("response contained no choices".to_string()))?;

    let content = choice.message.content.ok_or_else(|| {
        ChatError::MalformedResponse("first choice has no text content".to_string())
    })?;

    let role = match choice.message.role {
        OpenAiRole::System => Role::System,
        OpenAiRole::User => Role::User,
        OpenAiRole::Assistant => Role::Assistant,
        OpenAiRole::Tool => Role::Tool,
        other => {
            return Err(ChatError::MalformedResponse(format!(
                "unsupported role: {:?}",
                other
            )))
        }
    };

    Ok(ChatResponse {
        message: ChatMessage::new(role, content),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ChatOptions;
    use serde_json::json;

    fn completion(choices: serde_json::Value) -> CreateChatCompletionResponse {
        serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "gpt-4o",
            "choices": choices,
        }))
        .unwrap()
    }

    #[test]
    fn test_client_keeps_config() {
        let config = ClientConfig::new("http://localhost:8000/v1", "EMPTY", "gpt-4o");
        let client = OpenAiClient::new(config.clone());

        assert_eq!(client.config(), &config);
        assert_eq!(client.model(), "gpt-4o");
    }

    #[test]
    fn test_build_request_single_user_turn() {
        let request = ChatRequest::new("gpt-4o", vec![ChatMessage::user("What is the C++ FQA?")]);
        let built = build_request(&request).unwrap();
        let value = serde_json::to_value(&built).unwrap();

        assert_eq!(value["model"], "gpt-4o");
        assert_eq!(value["messages"].as_array().unwrap().len(), 1);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "What is the C++ FQA?");
        assert!(value.get("temperature").is_none());
        assert!(value.get("top_p").is_none());
    }

    #[test]
    fn test_build_request_sampling_options() {
        let request = ChatRequest::new(
            "gpt-4o",
            vec![ChatMessage::system("be brief"), ChatMessage::user("hi")],
        )
        .with_options(ChatOptions::default().with_temperature(0.5).with_top_p(0.25));
        let built = build_request(&request).unwrap();

        assert_eq!(built.temperature, Some(0.5));
        assert_eq!(built.top_p, Some(0.25));
        assert_eq!(built.messages.len(), 2);
    }

    #[test]
    fn test_build_request_rejects_tool_message() {
        let request = ChatRequest::new(
            "gpt-4o",
            vec![ChatMessage::new(Role::Tool, "{\"ok\":true}")],
        );

        assert!(matches!(
            build_request(&request),
            Err(ChatError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_build_request_validates_first() {
        let request = ChatRequest::new("gpt-4o", Vec::new());
        assert!(matches!(
            build_request(&request),
            Err(ChatError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_response_first_choice() {
        let response = completion(json!([
            {
                "index": 0,
                "message": { "role": "assistant", "content": "A critique of C++." },
                "finish_reason": "stop"
            },
            {
                "index": 1,
                "message": { "role": "assistant", "content": "ignored" },
                "finish_reason": "stop"
            }
        ]));

        let reply = into_chat_response(response).unwrap();
        assert_eq!(reply.message, ChatMessage::assistant("A critique of C++."));
    }

    #[test]
    fn test_response_without_choices() {
        let response = completion(json!([]));
        assert!(matches!(
            into_chat_response(response),
            Err(ChatError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_response_without_content() {
        let response = completion(json!([
            {
                "index": 0,
                "message": { "role": "assistant", "content": null },
                "finish_reason": "stop"
            }
        ]));

        assert!(matches!(
            into_chat_response(response),
            Err(ChatError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_response_with_function_role() {
        let response = completion(json!([
            {
                "index": 0,
                "message": { "role": "function", "content": "hi" },
                "finish_reason": "stop"
            }
        ]));

        assert!(matches!(
            into_chat_response(response),
            Err(ChatError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_response_with_tool_role() {
        let response = completion(json!([
            {
                "index": 0,
                "message": { "role": "tool", "content": "{}" },
                "finish_reason": "stop"
            }
        ]));

        let reply = into_chat_response(response).unwrap();
        assert_eq!(reply.message.role, Role::Tool);
    }
}

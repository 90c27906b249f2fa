//! services/api/src/adapters/text_llm.rs
//!
//! This module contains the adapter for the email-writing LLM.
//! It implements the `TextGenerationService` port from the `core` crate against any
//! OpenAI-compatible chat completions endpoint (Gemini exposes one under `/openai`).

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use campaign_core::ports::{PortError, PortResult, TextGenerationService};
use std::time::Duration;
use tracing::warn;

/// The OpenAI-compatible base URL for a Gemini API base URL.
pub fn openai_compatible_base(gemini_api_base: &str) -> String {
    format!("{}/openai", gemini_api_base.trim_end_matches('/'))
}

/// A client that makes a single attempt per request. Without a backoff of its
/// own, async-openai retries 5xx and rate-limit responses for minutes.
pub fn single_attempt_client(config: OpenAIConfig) -> Client<OpenAIConfig> {
    let no_retry = ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build();
    Client::with_config(config).with_backoff(no_retry)
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `TextGenerationService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct OpenAiTextAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiTextAdapter {
    /// Creates a new `OpenAiTextAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }
}

//=========================================================================================
// `TextGenerationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl TextGenerationService for OpenAiTextAdapter {
    /// Sends the prompt as a single user message and returns the first choice.
    async fn generate_text(&self, prompt: &str) -> PortResult<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?
            .into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .n(1)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        // Call the API and manually map the error if it occurs, which respects the orphan rule.
        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e: OpenAIError| {
                warn!("Text generation request failed: {}", e);
                PortError::RemoteService(e.to_string())
            })?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty());

        content.ok_or_else(|| {
            PortError::RemoteService("Text model returned no content in its response.".to_string())
        })
    }
}

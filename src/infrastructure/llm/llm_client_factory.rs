use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::presentation::config::{LlmProvider, LlmSettings};

use super::anthropic_client::AnthropicClient;
use super::openai_chat_client::OpenAiChatClient;

pub fn create_llm_client(settings: &LlmSettings) -> Result<Arc<dyn LlmClient>, LlmClientError> {
    tracing::info!(
        provider = ?settings.provider,
        model = %settings.model,
        max_tokens = settings.max_tokens,
        temperature = settings.temperature,
        "Creating reasoning client"
    );

    match settings.provider {
        LlmProvider::Anthropic => Ok(Arc::new(AnthropicClient::new(settings)?)),
        LlmProvider::OpenAi => Ok(Arc::new(OpenAiChatClient::new(settings)?)),
    }
}

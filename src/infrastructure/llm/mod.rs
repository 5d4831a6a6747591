mod anthropic_client;
mod llm_client_factory;
mod openai_chat_client;

pub use anthropic_client::AnthropicClient;
pub use llm_client_factory::create_llm_client;
pub use openai_chat_client::OpenAiChatClient;

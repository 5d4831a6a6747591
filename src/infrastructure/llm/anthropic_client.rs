use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ContentBlock, LlmClient, LlmClientError};
use crate::presentation::config::LlmSettings;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Messages API client.
pub struct AnthropicClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Vec<RequestBlock<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RequestBlock<'a> {
    Text { text: &'a str },
    InputAudio { input_audio: InputAudio<'a> },
}

#[derive(Serialize)]
struct InputAudio<'a> {
    data: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ResponseBlock>,
}

#[derive(Deserialize)]
struct ResponseBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicClient {
    pub fn new(settings: &LlmSettings) -> Result<Self, LlmClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| LlmClientError::ApiRequestFailed(format!("client build: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings
                .base_url
                .as_deref()
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            api_key: settings.api_key.clone().filter(|k| !k.trim().is_empty()),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        })
    }

    fn api_key(&self) -> Result<&str, LlmClientError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| LlmClientError::MissingApiKey("ANTHROPIC_API_KEY".to_string()))
    }
}

fn to_request_blocks(content: &[ContentBlock]) -> Vec<RequestBlock<'_>> {
    content
        .iter()
        .map(|block| match block {
            ContentBlock::Text(text) => RequestBlock::Text { text },
            ContentBlock::InputAudio { data, format } => RequestBlock::InputAudio {
                input_audio: InputAudio { data, format },
            },
        })
        .collect()
}

#[async_trait]
impl LlmClient for AnthropicClient {
    #[tracing::instrument(skip(self, content), fields(model = %self.model, blocks = content.len()))]
    async fn complete(&self, content: &[ContentBlock]) -> Result<String, LlmClientError> {
        let api_key = self.api_key()?;

        let request_body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            messages: vec![Message {
                role: "user",
                content: to_request_blocks(content),
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Anthropic API returned an error");
            return Err(LlmClientError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let messages_response: MessagesResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        let text = messages_response
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text)
            .collect::<String>();

        tracing::debug!(chars = text.len(), "Anthropic completion received");

        Ok(text)
    }

    fn verify_configuration(&self) -> Result<(), LlmClientError> {
        self.api_key().map(|_| ())
    }
}

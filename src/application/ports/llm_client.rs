use async_trait::async_trait;

use super::content_block::ContentBlock;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends one user message and returns the reply text, segments joined in order.
    async fn complete(&self, content: &[ContentBlock]) -> Result<String, LlmClientError>;

    /// Checked before any outbound call is made.
    fn verify_configuration(&self) -> Result<(), LlmClientError> {
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("missing api key: {0}")]
    MissingApiKey(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("upstream returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

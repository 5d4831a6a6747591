use async_trait::async_trait;

use crate::domain::AudioAttachment;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        attachment: &AudioAttachment,
        audio_data: &[u8],
    ) -> Result<String, TranscriptionError>;

    fn verify_configuration(&self) -> Result<(), TranscriptionError> {
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("missing api key: {0}")]
    MissingApiKey(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("upstream returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

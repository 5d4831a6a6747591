use async_trait::async_trait;

use crate::domain::{AssessmentInput, Transcripts};

use super::llm_client::LlmClientError;
use super::transcription_engine::TranscriptionError;

/// A way of turning an assessment into raw model text.
#[async_trait]
pub trait InferenceStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fails when a credential the strategy needs is absent.
    fn verify_configuration(&self) -> Result<(), InferenceError>;

    async fn infer(&self, input: &AssessmentInput) -> Result<InferenceOutput, InferenceError>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InferenceOutput {
    pub raw_text: String,
    pub transcripts: Transcripts,
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
}

use std::sync::Arc;

use crate::application::ports::{InferenceStrategy, LlmClientError, TranscriptionError};
use crate::application::services::{MultimodalInference, TranscribeThenClassify};
use crate::infrastructure::audio::OpenAiWhisperEngine;
use crate::infrastructure::llm::create_llm_client;
use crate::presentation::config::{ClassificationStrategy, Settings};

#[derive(Debug, thiserror::Error)]
pub enum InferenceFactoryError {
    #[error("reasoning client: {0}")]
    Llm(#[from] LlmClientError),
    #[error("transcription engine: {0}")]
    Transcription(#[from] TranscriptionError),
}

pub struct InferenceStrategyFactory;

impl InferenceStrategyFactory {
    /// Builds the configured strategy. Missing keys are not an error here;
    /// they surface per request.
    pub fn create(settings: &Settings) -> Result<Arc<dyn InferenceStrategy>, InferenceFactoryError> {
        let llm_client = create_llm_client(&settings.llm)?;

        let strategy: Arc<dyn InferenceStrategy> = match settings.classification.strategy {
            ClassificationStrategy::Multimodal => Arc::new(MultimodalInference::new(llm_client)),
            ClassificationStrategy::Transcription => {
                let engine = OpenAiWhisperEngine::new(&settings.transcription)?;
                Arc::new(TranscribeThenClassify::new(Arc::new(engine), llm_client))
            }
        };

        tracing::info!(strategy = strategy.name(), "Inference strategy ready");

        Ok(strategy)
    }
}

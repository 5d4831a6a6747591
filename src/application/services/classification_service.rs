use std::sync::Arc;

use crate::application::ports::{
    InferenceError, InferenceStrategy, LlmClientError, TranscriptionError,
};
use crate::domain::{AssessmentInput, ClassificationDebug, ClassificationResult};

use super::category_resolver::resolve_category;

pub struct ClassificationService {
    strategy: Arc<dyn InferenceStrategy>,
}

impl ClassificationService {
    pub fn new(strategy: Arc<dyn InferenceStrategy>) -> Self {
        Self { strategy }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Runs the configured strategy and resolves its output to a category.
    ///
    /// Missing credentials are reported before the strategy makes any call.
    pub async fn classify(
        &self,
        input: AssessmentInput,
    ) -> Result<ClassificationResult, ClassificationError> {
        self.strategy.verify_configuration()?;

        let output = self.strategy.infer(&input).await?;
        let resolution = resolve_category(&output.raw_text);

        if resolution.is_fallback() {
            tracing::warn!(
                raw_chars = output.raw_text.chars().count(),
                default = %resolution.category(),
                "Model output named no known category, using default"
            );
        }

        tracing::info!(
            strategy = self.strategy.name(),
            category = %resolution.category(),
            fallback = resolution.is_fallback(),
            "Assessment classified"
        );

        let debug = input.debug.then(|| ClassificationDebug {
            strategy: self.strategy.name(),
            raw_model_text: output.raw_text.clone(),
            fallback_used: resolution.is_fallback(),
            transcripts: output.transcripts.clone(),
            attachments: input.attachment_diagnostics,
        });

        Ok(ClassificationResult {
            resolution,
            identity: input.identity,
            raw_model_text: output.raw_text,
            transcripts: output.transcripts,
            debug,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("configuration: {0}")]
    Configuration(String),
    #[error("{service} service returned HTTP {status}")]
    Upstream {
        service: &'static str,
        status: u16,
        body: String,
    },
    #[error("inference: {0}")]
    Inference(InferenceError),
}

impl From<InferenceError> for ClassificationError {
    fn from(error: InferenceError) -> Self {
        match error {
            InferenceError::Completion(LlmClientError::MissingApiKey(key))
            | InferenceError::Transcription(TranscriptionError::MissingApiKey(key)) => {
                ClassificationError::Configuration(format!("{} is not configured", key))
            }
            InferenceError::Completion(LlmClientError::UpstreamStatus { status, body }) => {
                ClassificationError::Upstream {
                    service: "reasoning",
                    status,
                    body,
                }
            }
            InferenceError::Transcription(TranscriptionError::UpstreamStatus { status, body }) => {
                ClassificationError::Upstream {
                    service: "transcription",
                    status,
                    body,
                }
            }
            other => ClassificationError::Inference(other),
        }
    }
}

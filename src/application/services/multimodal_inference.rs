use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    InferenceError, InferenceOutput, InferenceStrategy, LlmClient,
};
use crate::domain::AssessmentInput;

use super::prompt_composer::{AudioContent, compose_prompt};

/// Single reasoning call with the recordings embedded as audio blocks.
pub struct MultimodalInference {
    llm_client: Arc<dyn LlmClient>,
}

impl MultimodalInference {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }
}

#[async_trait]
impl InferenceStrategy for MultimodalInference {
    fn name(&self) -> &'static str {
        "multimodal"
    }

    fn verify_configuration(&self) -> Result<(), InferenceError> {
        self.llm_client.verify_configuration()?;
        Ok(())
    }

    #[tracing::instrument(skip(self, input), fields(has_audio = input.has_audio()))]
    async fn infer(&self, input: &AssessmentInput) -> Result<InferenceOutput, InferenceError> {
        let content = compose_prompt(
            &input.quiz,
            AudioContent::Inline {
                food: input.food_audio.as_ref(),
                routine: input.routine_audio.as_ref(),
            },
        );

        let raw_text = self.llm_client.complete(&content).await?;

        Ok(InferenceOutput {
            raw_text,
            transcripts: Default::default(),
        })
    }
}

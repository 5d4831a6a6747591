use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    InferenceError, InferenceOutput, InferenceStrategy, LlmClient, TranscriptionEngine,
};
use crate::domain::{AssessmentInput, AttachmentKind, Transcripts};

use super::prompt_composer::{AudioContent, compose_prompt};

/// Speech-to-text per recording, then a text-only reasoning call.
pub struct TranscribeThenClassify {
    transcription_engine: Arc<dyn TranscriptionEngine>,
    llm_client: Arc<dyn LlmClient>,
}

impl TranscribeThenClassify {
    pub fn new(
        transcription_engine: Arc<dyn TranscriptionEngine>,
        llm_client: Arc<dyn LlmClient>,
    ) -> Self {
        Self {
            transcription_engine,
            llm_client,
        }
    }

    async fn transcribe_all(&self, input: &AssessmentInput) -> Result<Transcripts, InferenceError> {
        let mut transcripts = Transcripts::default();

        // Sequential: food first, then routine.
        for attachment in input.attachments() {
            let audio_data = match attachment.decode() {
                Ok(bytes) if !bytes.is_empty() => bytes,
                Ok(_) => {
                    tracing::warn!(kind = attachment.kind.as_str(), "Skipping empty recording");
                    continue;
                }
                Err(e) => {
                    tracing::warn!(
                        kind = attachment.kind.as_str(),
                        error = %e,
                        "Skipping recording with invalid base64 payload"
                    );
                    continue;
                }
            };

            let transcript = self
                .transcription_engine
                .transcribe(attachment, &audio_data)
                .await?;

            tracing::debug!(
                kind = attachment.kind.as_str(),
                transcript_chars = transcript.chars().count(),
                "Recording transcribed"
            );

            let transcript = Some(transcript).filter(|t| !t.trim().is_empty());
            match attachment.kind {
                AttachmentKind::Food => transcripts.food = transcript,
                AttachmentKind::Routine => transcripts.routine = transcript,
            }
        }

        Ok(transcripts)
    }
}

#[async_trait]
impl InferenceStrategy for TranscribeThenClassify {
    fn name(&self) -> &'static str {
        "transcription"
    }

    fn verify_configuration(&self) -> Result<(), InferenceError> {
        self.transcription_engine.verify_configuration()?;
        self.llm_client.verify_configuration()?;
        Ok(())
    }

    #[tracing::instrument(skip(self, input), fields(has_audio = input.has_audio()))]
    async fn infer(&self, input: &AssessmentInput) -> Result<InferenceOutput, InferenceError> {
        let transcripts = self.transcribe_all(input).await?;

        let content = compose_prompt(&input.quiz, AudioContent::Transcripts(&transcripts));
        let raw_text = self.llm_client.complete(&content).await?;

        Ok(InferenceOutput {
            raw_text,
            transcripts,
        })
    }
}

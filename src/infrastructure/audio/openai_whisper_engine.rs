use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::AudioAttachment;
use crate::presentation::config::TranscriptionSettings;

pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    text: String,
}

impl OpenAiWhisperEngine {
    pub fn new(settings: &TranscriptionSettings) -> Result<Self, TranscriptionError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("client build: {}", e)))?;

        Ok(Self {
            client,
            api_key: settings.api_key.clone().filter(|k| !k.trim().is_empty()),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
        })
    }

    fn api_key(&self) -> Result<&str, TranscriptionError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| TranscriptionError::MissingApiKey("OPENAI_API_KEY".to_string()))
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    #[tracing::instrument(
        skip(self, attachment, audio_data),
        fields(kind = attachment.kind.as_str(), bytes = audio_data.len())
    )]
    async fn transcribe(
        &self,
        attachment: &AudioAttachment,
        audio_data: &[u8],
    ) -> Result<String, TranscriptionError> {
        let api_key = self.api_key()?;
        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = multipart::Part::bytes(audio_data.to_vec())
            .file_name(attachment.file_name())
            .mime_str(&attachment.media_type)
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "json")
            .part("file", file_part);

        tracing::debug!(model = %self.model, "Sending audio to Whisper API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            tracing::error!(status = %status, body = %body, "Whisper API returned an error");
            return Err(TranscriptionError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let result: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("parse response: {}", e)))?;

        tracing::info!(chars = result.text.len(), "Whisper transcription completed");

        Ok(result.text.trim().to_string())
    }

    fn verify_configuration(&self) -> Result<(), TranscriptionError> {
        self.api_key().map(|_| ())
    }
}

use super::audio_attachment::{AttachmentDiagnostics, AudioAttachment};

/// Quiz answers as text, in the order they appear in the prompt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizAnswers {
    pub energy: String,
    pub sleep_hours: String,
    pub bedtime: String,
    pub night_shifts: String,
    pub stress: String,
    pub indoor_time: String,
    pub digestive: String,
    pub body_comp: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Identity {
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

/// A normalized classification request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentInput {
    pub quiz: QuizAnswers,
    pub food_audio: Option<AudioAttachment>,
    pub routine_audio: Option<AudioAttachment>,
    pub identity: Identity,
    pub attachment_diagnostics: Vec<AttachmentDiagnostics>,
    pub debug: bool,
}

impl AssessmentInput {
    pub fn attachments(&self) -> impl Iterator<Item = &AudioAttachment> {
        self.food_audio.iter().chain(self.routine_audio.iter())
    }

    pub fn has_audio(&self) -> bool {
        self.food_audio.is_some() || self.routine_audio.is_some()
    }
}

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::{
    AssessmentInput, AttachmentDiagnostics, AttachmentKind, AudioAttachment, Identity,
    QuizAnswers,
};

/// Request body as submitted by the quiz front end.
///
/// Every field is optional. Absent or `null` values become the empty string,
/// numbers and booleans are kept as their textual form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentRequest {
    #[serde(deserialize_with = "lenient_text")]
    pub energy: String,
    #[serde(deserialize_with = "lenient_text")]
    pub sleep_hours: String,
    #[serde(deserialize_with = "lenient_text")]
    pub bedtime: String,
    #[serde(deserialize_with = "lenient_text")]
    pub night_shifts: String,
    #[serde(deserialize_with = "lenient_text")]
    pub stress: String,
    #[serde(deserialize_with = "lenient_text")]
    pub indoor_time: String,
    #[serde(deserialize_with = "lenient_text")]
    pub digestive: String,
    #[serde(deserialize_with = "lenient_text")]
    pub body_comp: String,
    #[serde(deserialize_with = "lenient_text")]
    pub food_audio: String,
    #[serde(deserialize_with = "lenient_text")]
    pub routine_audio: String,
    #[serde(deserialize_with = "lenient_text")]
    pub full_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_flag")]
    pub debug: bool,
}

impl AssessmentRequest {
    /// Parses a raw body; an empty body is an empty request.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }
}

/// Turns a raw request into pipeline input, dropping unusable attachments.
pub fn normalize(request: AssessmentRequest) -> AssessmentInput {
    let food_audio = AudioAttachment::from_data_uri(AttachmentKind::Food, &request.food_audio);
    let routine_audio =
        AudioAttachment::from_data_uri(AttachmentKind::Routine, &request.routine_audio);

    let attachment_diagnostics = vec![
        AttachmentDiagnostics::inspect(
            AttachmentKind::Food,
            &request.food_audio,
            food_audio.as_ref(),
        ),
        AttachmentDiagnostics::inspect(
            AttachmentKind::Routine,
            &request.routine_audio,
            routine_audio.as_ref(),
        ),
    ];

    for diagnostics in attachment_diagnostics
        .iter()
        .filter(|d| d.present && !d.recognized)
    {
        tracing::warn!(
            field = diagnostics.field,
            "Dropping audio field that is not an audio data URI"
        );
    }

    AssessmentInput {
        quiz: QuizAnswers {
            energy: request.energy,
            sleep_hours: request.sleep_hours,
            bedtime: request.bedtime,
            night_shifts: request.night_shifts,
            stress: request.stress,
            indoor_time: request.indoor_time,
            digestive: request.digestive,
            body_comp: request.body_comp,
        },
        food_audio,
        routine_audio,
        identity: Identity {
            full_name: non_empty(request.full_name),
            phone: non_empty(request.phone),
        },
        attachment_diagnostics,
        debug: request.debug,
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::String(s) => matches!(s.to_lowercase().as_str(), "true" | "1" | "yes"),
        Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        _ => false,
    })
}

use std::sync::LazyLock;

use base64::{Engine as _, engine::general_purpose};
use regex::Regex;
use serde::Serialize;

const DATA_URI_PREFIX: &str = "data:audio";

// Subtype restricted to RFC 6838 name characters so the media type is always a
// valid header value for the transcription upload.
static AUDIO_DATA_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:(audio/[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]*);base64,(.+)$").unwrap()
});

/// Which recording an attachment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Food,
    Routine,
}

impl AttachmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttachmentKind::Food => "food",
            AttachmentKind::Routine => "routine",
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            AttachmentKind::Food => "foodAudio",
            AttachmentKind::Routine => "routineAudio",
        }
    }
}

/// Audio recording submitted as a `data:audio/...;base64,...` URI.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioAttachment {
    pub kind: AttachmentKind,
    pub media_type: String,
    pub payload: String,
}

impl AudioAttachment {
    /// Returns `None` for anything that is not a well-formed audio data URI.
    pub fn from_data_uri(kind: AttachmentKind, value: &str) -> Option<Self> {
        if !value.starts_with(DATA_URI_PREFIX) {
            return None;
        }

        let captures = AUDIO_DATA_URI.captures(value)?;
        Some(Self {
            kind,
            media_type: captures[1].to_string(),
            payload: captures[2].to_string(),
        })
    }

    /// Media subtype as providers name audio formats (`audio/mpeg` -> `mp3`).
    pub fn format(&self) -> &str {
        let subtype = self
            .media_type
            .split_once('/')
            .map(|(_, s)| s)
            .unwrap_or(self.media_type.as_str());

        match subtype {
            "mpeg" | "mp3" => "mp3",
            "wav" | "wave" | "x-wav" => "wav",
            "x-m4a" | "m4a" | "mp4" => "m4a",
            other => other,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.kind.as_str(), self.format())
    }

    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        general_purpose::STANDARD.decode(self.payload.as_bytes())
    }
}

/// Per-field record of what the normalizer saw, surfaced in debug responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentDiagnostics {
    pub field: &'static str,
    pub present: bool,
    pub recognized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    pub payload_length: usize,
}

impl AttachmentDiagnostics {
    pub fn inspect(kind: AttachmentKind, raw: &str, attachment: Option<&AudioAttachment>) -> Self {
        Self {
            field: kind.field_name(),
            present: !raw.is_empty(),
            recognized: attachment.is_some(),
            media_type: attachment.map(|a| a.media_type.clone()),
            payload_length: attachment.map(|a| a.payload.len()).unwrap_or(0),
        }
    }
}

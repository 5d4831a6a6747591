use serde::Serialize;

use super::assessment::Identity;
use super::audio_attachment::AttachmentDiagnostics;
use super::disruptor_category::DisruptorCategory;

/// Outcome of mapping model text onto a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryResolution {
    Matched(DisruptorCategory),
    DefaultFallback,
}

impl CategoryResolution {
    pub fn category(&self) -> DisruptorCategory {
        match self {
            CategoryResolution::Matched(category) => *category,
            CategoryResolution::DefaultFallback => DisruptorCategory::DEFAULT,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, CategoryResolution::DefaultFallback)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transcripts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routine: Option<String>,
}

impl Transcripts {
    pub fn is_empty(&self) -> bool {
        self.food.is_none() && self.routine.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationDebug {
    pub strategy: &'static str,
    pub raw_model_text: String,
    pub fallback_used: bool,
    pub transcripts: Transcripts,
    pub attachments: Vec<AttachmentDiagnostics>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub resolution: CategoryResolution,
    pub identity: Identity,
    /// Unresolved model reply, kept for boundary logging.
    pub raw_model_text: String,
    pub transcripts: Transcripts,
    pub debug: Option<ClassificationDebug>,
}

impl ClassificationResult {
    pub fn category(&self) -> DisruptorCategory {
        self.resolution.category()
    }
}

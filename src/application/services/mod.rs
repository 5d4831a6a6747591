mod category_resolver;
mod classification_service;
mod input_normalizer;
mod multimodal_inference;
mod prompt_composer;
mod transcribe_then_classify;

pub use category_resolver::resolve_category;
pub use classification_service::{ClassificationError, ClassificationService};
pub use input_normalizer::{AssessmentRequest, normalize};
pub use multimodal_inference::MultimodalInference;
pub use prompt_composer::{AudioContent, compose_prompt};
pub use transcribe_then_classify::TranscribeThenClassify;

mod assessment;
mod audio_attachment;
mod classification_result;
mod disruptor_category;

pub use assessment::{AssessmentInput, Identity, QuizAnswers};
pub use audio_attachment::{AttachmentDiagnostics, AttachmentKind, AudioAttachment};
pub use classification_result::{
    CategoryResolution, ClassificationDebug, ClassificationResult, Transcripts,
};
pub use disruptor_category::DisruptorCategory;

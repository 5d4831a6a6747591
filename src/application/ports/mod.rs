mod content_block;
mod inference_strategy;
mod llm_client;
mod transcription_engine;

pub use content_block::ContentBlock;
pub use inference_strategy::{InferenceError, InferenceOutput, InferenceStrategy};
pub use llm_client::{LlmClient, LlmClientError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};

pub mod audio;
mod inference_factory;
pub mod llm;
pub mod observability;

pub use inference_factory::{InferenceFactoryError, InferenceStrategyFactory};

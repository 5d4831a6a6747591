mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ClassificationSettings, ClassificationStrategy, LlmProvider, LlmSettings, LoggingSettings,
    ServerSettings, Settings, TranscriptionSettings,
};

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub transcription: TranscriptionSettings,
    pub classification: ClassificationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Anthropic,
    #[serde(rename = "openai")]
    OpenAi,
}

impl LlmProvider {
    pub fn api_key_var(&self) -> &'static str {
        match self {
            LlmProvider::Anthropic => "ANTHROPIC_API_KEY",
            LlmProvider::OpenAi => "OPENAI_API_KEY",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationStrategy {
    Multimodal,
    Transcription,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationSettings {
    pub strategy: ClassificationStrategy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json_format: bool,
}

impl Settings {
    /// Layers defaults, `appsettings.<env>.toml` and `APP__*` variables. Keys
    /// left unset fall back to the provider's conventional variable.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let layered = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("llm.provider", "anthropic")?
            .set_default("llm.model", "claude-sonnet-4-20250514")?
            .set_default("llm.max_tokens", 20)?
            .set_default("llm.temperature", 0.0)?
            .set_default("llm.timeout_secs", 60)?
            .set_default("transcription.base_url", "https://api.openai.com/v1")?
            .set_default("transcription.model", "whisper-1")?
            .set_default("transcription.timeout_secs", 60)?
            .set_default("classification.strategy", "multimodal")?
            .set_default(
                "logging.level",
                "info,disruptor_classifier=debug,tower_http=debug",
            )?
            .set_default("logging.json_format", environment == Environment::Prod)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option(
                "server.port",
                std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse::<u16>().ok())
                    .map(i64::from),
            )?
            .build()?;

        let mut settings: Settings = layered.try_deserialize()?;

        if settings.llm.api_key.is_none() {
            settings.llm.api_key = std::env::var(settings.llm.provider.api_key_var()).ok();
        }
        if settings.transcription.api_key.is_none() {
            settings.transcription.api_key = std::env::var("OPENAI_API_KEY").ok();
        }

        Ok(settings)
    }
}

use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::DEFAULT_SYSTEM_PROMPT;
use crate::infrastructure::prediction::DEFAULT_PREDICTION_URL;

/// Legacy variable names still honoured on top of `APP__*`.
const LEGACY_VARIABLES: [(&str, &str); 5] = [
    ("OPENAI_API_KEY", "llm.api_key"),
    ("OPENAI_TTS_API_KEY", "tts.api_key"),
    ("AZURE_SPEECH_KEY", "speech.key"),
    ("AZURE_SPEECH_REGION", "speech.region"),
    ("SERVER_PORT", "server.port"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub tts: TtsSettings,
    pub speech: SpeechSettings,
    pub prediction: PredictionSettings,
    pub audio: AudioSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub chat_model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub system_prompt: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TtsSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: String,
    pub voice: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    pub key: String,
    pub region: String,
    pub language: String,
    /// Overrides the regional endpoint, e.g. for a container deployment.
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionSettings {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    pub scratch_dir: String,
    pub ffmpeg_path: String,
    pub rhubarb_path: String,
    pub rhubarb_recognizer: String,
    pub rhubarb_extended_shapes: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Environment(String),
    #[error("{0} is not set")]
    Missing(&'static str),
}

impl Settings {
    /// Defaults, then `appsettings.<env>.toml`, then `APP__SECTION__KEY`
    /// variables, then the legacy variables.
    pub fn load() -> Result<Self, SettingsError> {
        let environment = Environment::from_env().map_err(SettingsError::Environment)?;
        Self::build(environment, |name| std::env::var(name).ok())
    }

    pub fn build<F>(environment: Environment, lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 4000)?
            .set_default("llm.api_key", "")?
            .set_default("llm.chat_model", "gpt-4")?
            .set_default("llm.max_tokens", 1000)?
            .set_default("llm.temperature", 1.0)?
            .set_default("llm.system_prompt", DEFAULT_SYSTEM_PROMPT)?
            .set_default("tts.api_key", "")?
            .set_default("tts.model", "tts-1")?
            .set_default("tts.voice", "nova")?
            .set_default("speech.key", "")?
            .set_default("speech.region", "")?
            .set_default("speech.language", "en-US")?
            .set_default("prediction.url", DEFAULT_PREDICTION_URL)?
            .set_default("audio.scratch_dir", "audios")?
            .set_default("audio.ffmpeg_path", "ffmpeg")?
            .set_default("audio.rhubarb_path", "rhubarb")?
            .set_default("audio.rhubarb_recognizer", "phonetic")?
            .set_default("audio.rhubarb_extended_shapes", "ABCDEFGHX")?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        for (variable, key) in LEGACY_VARIABLES {
            builder = builder.set_override_option(key, lookup(variable))?;
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// Every chat path needs both OpenAI keys; the speech service key and
    /// region are required as well so misconfiguration surfaces at startup.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let required = [
            ("AZURE_SPEECH_KEY", &self.speech.key),
            ("AZURE_SPEECH_REGION", &self.speech.region),
            ("OPENAI_API_KEY", &self.llm.api_key),
            ("OPENAI_TTS_API_KEY", &self.tts.api_key),
        ];

        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(SettingsError::Missing(*name)),
            None => Ok(()),
        }
    }
}

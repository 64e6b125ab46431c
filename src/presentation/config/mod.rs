mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AudioSettings, LlmSettings, LoggingSettings, PredictionSettings, ServerSettings,
    Settings, SettingsError, SpeechSettings, TtsSettings,
};

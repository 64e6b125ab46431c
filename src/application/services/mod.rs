mod avatar_service;
mod script_parser;
mod voice_line_renderer;

pub use avatar_service::{
    AvatarError, AvatarService, DEFAULT_GREETING, DEFAULT_SYSTEM_PROMPT, PREDICT_USAGE,
    PREDICTION_FAILED, prediction_announcement,
};
pub use script_parser::{ScriptError, parse_script};
pub use voice_line_renderer::{RenderError, RenderedSpeech, VoiceLineRenderer};

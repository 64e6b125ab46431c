use serde::Deserialize;

use super::ReplyMessage;

/// A line of dialogue as written by the language model, before any audio exists.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptedLine {
    pub text: String,
    #[serde(default = "default_facial_expression")]
    pub facial_expression: String,
    #[serde(default = "default_animation")]
    pub animation: String,
}

fn default_facial_expression() -> String {
    "default".to_string()
}

fn default_animation() -> String {
    ReplyMessage::TALKING.to_string()
}

impl From<ScriptedLine> for ReplyMessage {
    fn from(line: ScriptedLine) -> Self {
        ReplyMessage::new(line.text, line.facial_expression, line.animation)
    }
}

use serde::Deserialize;
use serde_json::Value;

use crate::domain::ScriptedLine;

#[derive(Deserialize)]
#[serde(untagged)]
enum Script {
    Lines(Vec<ScriptedLine>),
    Wrapped { messages: Vec<ScriptedLine> },
}

/// Parses model output into dialogue lines. Accepts a bare JSON array or an
/// object carrying the array under `messages`.
pub fn parse_script(raw: &str) -> Result<Vec<ScriptedLine>, ScriptError> {
    let value: Value = serde_json::from_str(raw.trim()).map_err(ScriptError::InvalidJson)?;

    let lines = match serde_json::from_value(value)
        .map_err(|e| ScriptError::UnexpectedShape(e.to_string()))?
    {
        Script::Lines(lines) => lines,
        Script::Wrapped { messages } => messages,
    };

    if lines.is_empty() {
        return Err(ScriptError::UnexpectedShape("no messages".to_string()));
    }

    Ok(lines)
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("model output is not json: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("model output has unexpected shape: {0}")]
    UnexpectedShape(String),
}

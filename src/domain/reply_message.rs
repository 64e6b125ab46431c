use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use super::LipSyncDocument;

/// One line of avatar speech as returned to the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyMessage {
    pub text: String,
    pub facial_expression: String,
    pub animation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lipsync: Option<LipSyncDocument>,
}

impl ReplyMessage {
    pub const TALKING: &'static str = "Talking";
    pub const SMILE: &'static str = "smile";
    pub const NEUTRAL: &'static str = "neutral";

    pub fn new(
        text: impl Into<String>,
        facial_expression: impl Into<String>,
        animation: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            facial_expression: facial_expression.into(),
            animation: animation.into(),
            audio: None,
            lipsync: None,
        }
    }

    /// Text-only line: no audio, no lip-sync.
    pub fn spoken_plainly(text: impl Into<String>) -> Self {
        Self::new(text, Self::NEUTRAL, Self::TALKING)
    }

    /// Attaches MP3 bytes (base64-encoded) and the matching lip-sync cues.
    pub fn with_speech(mut self, audio: &[u8], lipsync: LipSyncDocument) -> Self {
        self.audio = Some(BASE64.encode(audio));
        self.lipsync = Some(lipsync);
        self
    }

    pub fn has_speech(&self) -> bool {
        self.audio.is_some() && self.lipsync.is_some()
    }
}

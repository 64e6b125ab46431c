use std::fmt;

use chrono::Utc;
use uuid::Uuid;

/// Which branch produced an audio artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Message,
    Default,
    Prediction,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Message => "message",
            ArtifactKind::Default => "default",
            ArtifactKind::Prediction => "prediction",
        }
    }
}

/// Base file name shared by the mp3, wav and json artifacts of one spoken line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactStem(String);

impl ArtifactStem {
    pub fn new(kind: ArtifactKind) -> Self {
        Self(format!(
            "{}_{}_{}",
            kind.as_str(),
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple()
        ))
    }

    pub fn from_raw(stem: impl Into<String>) -> Self {
        Self(stem.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.0, extension)
    }
}

impl fmt::Display for ArtifactStem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

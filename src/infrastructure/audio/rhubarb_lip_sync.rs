use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{LipSyncAnalyzer, LipSyncError};
use crate::domain::LipSyncDocument;

use super::command::run_tool;

pub const PHONETIC_RECOGNIZER: &str = "phonetic";
pub const EXTENDED_SHAPES: &str = "ABCDEFGHX";

/// Rhubarb Lip Sync invoked as
/// `rhubarb -r <recognizer> -f json -o <out.json> <in.wav> --extendedShapes <shapes>`.
/// The JSON lands next to the WAV file.
pub struct RhubarbLipSyncAnalyzer {
    program: PathBuf,
    recognizer: String,
    extended_shapes: String,
}

impl RhubarbLipSyncAnalyzer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            recognizer: PHONETIC_RECOGNIZER.to_string(),
            extended_shapes: EXTENDED_SHAPES.to_string(),
        }
    }

    pub fn with_recognizer(mut self, recognizer: impl Into<String>) -> Self {
        self.recognizer = recognizer.into();
        self
    }

    pub fn with_extended_shapes(mut self, shapes: impl Into<String>) -> Self {
        self.extended_shapes = shapes.into();
        self
    }
}

#[async_trait]
impl LipSyncAnalyzer for RhubarbLipSyncAnalyzer {
    async fn analyze(&self, wav_path: &Path) -> Result<LipSyncDocument, LipSyncError> {
        let json_path = wav_path.with_extension("json");
        let args = [
            OsStr::new("-r"),
            OsStr::new(&self.recognizer),
            OsStr::new("-f"),
            OsStr::new("json"),
            OsStr::new("-o"),
            json_path.as_os_str(),
            wav_path.as_os_str(),
            OsStr::new("--extendedShapes"),
            OsStr::new(&self.extended_shapes),
        ];

        run_tool(&self.program, args).await.inspect_err(|e| {
            tracing::error!(error = ?e, wav = %wav_path.display(), "rhubarb failed");
        })?;

        let raw = tokio::fs::read_to_string(&json_path)
            .await
            .map_err(LipSyncError::OutputUnreadable)?;

        Ok(LipSyncDocument::from_json(&raw)?)
    }
}

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{AudioTranscoder, TranscodeError};

use super::command::run_tool;

pub struct FfmpegTranscoder {
    program: PathBuf,
}

impl FfmpegTranscoder {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl AudioTranscoder for FfmpegTranscoder {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<String, TranscodeError> {
        let args = [
            OsStr::new("-y"),
            OsStr::new("-i"),
            input.as_os_str(),
            output.as_os_str(),
        ];

        let stdout = run_tool(&self.program, args).await.inspect_err(|e| {
            tracing::error!(error = ?e, input = %input.display(), "ffmpeg failed");
        })?;

        Ok(stdout)
    }
}

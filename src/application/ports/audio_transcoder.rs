use std::path::Path;

use async_trait::async_trait;

#[async_trait]
pub trait AudioTranscoder: Send + Sync {
    /// Converts `input` into the container implied by `output`'s extension.
    /// Returns the tool's standard output.
    async fn transcode(&self, input: &Path, output: &Path) -> Result<String, TranscodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("failed to spawn transcoder: {0}")]
    SpawnFailed(#[source] std::io::Error),
    #[error("transcoder exited with {status}: {stderr}")]
    ProcessFailed { status: String, stderr: String },
}

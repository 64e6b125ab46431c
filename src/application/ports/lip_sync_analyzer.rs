use std::path::Path;

use async_trait::async_trait;

use crate::domain::LipSyncDocument;

#[async_trait]
pub trait LipSyncAnalyzer: Send + Sync {
    /// Analyzes a WAV file and returns its mouth cues.
    async fn analyze(&self, wav_path: &Path) -> Result<LipSyncDocument, LipSyncError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LipSyncError {
    #[error("failed to spawn lip-sync analyzer: {0}")]
    SpawnFailed(#[source] std::io::Error),
    #[error("lip-sync analyzer exited with {status}: {stderr}")]
    ProcessFailed { status: String, stderr: String },
    #[error("lip-sync output unreadable: {0}")]
    OutputUnreadable(#[source] std::io::Error),
    #[error("lip-sync output is not valid json: {0}")]
    InvalidOutput(#[from] serde_json::Error),
}

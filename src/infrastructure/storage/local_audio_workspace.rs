use std::path::PathBuf;

use tokio::io::AsyncWriteExt;

use crate::application::ports::{ArtifactPaths, AudioWorkspace, WorkspaceError};
use crate::domain::{ArtifactKind, ArtifactStem};

/// Scratch directory on local disk for mp3/wav/json artifacts.
/// The directory is created on first use; files are never removed.
pub struct LocalAudioWorkspace {
    dir: PathBuf,
}

impl LocalAudioWorkspace {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait::async_trait]
impl AudioWorkspace for LocalAudioWorkspace {
    async fn store_audio(
        &self,
        kind: ArtifactKind,
        audio: &[u8],
    ) -> Result<ArtifactPaths, WorkspaceError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| WorkspaceError::CreateDirFailed {
                path: self.dir.clone(),
                source,
            })?;

        let paths = ArtifactPaths::new(&self.dir, ArtifactStem::new(kind));

        // create_new: an existing file is an error, never overwritten
        let write_failed = |source| WorkspaceError::WriteFailed {
            path: paths.mp3.clone(),
            source,
        };
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&paths.mp3)
            .await
            .map_err(write_failed)?;
        file.write_all(audio).await.map_err(write_failed)?;
        file.flush().await.map_err(write_failed)?;

        Ok(paths)
    }
}

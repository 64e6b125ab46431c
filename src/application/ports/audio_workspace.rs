use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::{ArtifactKind, ArtifactStem};

/// File locations of the three artifacts that belong to one spoken line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub stem: ArtifactStem,
    pub mp3: PathBuf,
    pub wav: PathBuf,
    pub json: PathBuf,
}

impl ArtifactPaths {
    pub fn new(dir: &Path, stem: ArtifactStem) -> Self {
        Self {
            mp3: dir.join(stem.file_name("mp3")),
            wav: dir.join(stem.file_name("wav")),
            json: dir.join(stem.file_name("json")),
            stem,
        }
    }
}

#[async_trait]
pub trait AudioWorkspace: Send + Sync {
    /// Writes `audio` under a fresh stem and returns the paths of that stem.
    async fn store_audio(
        &self,
        kind: ArtifactKind,
        audio: &[u8],
    ) -> Result<ArtifactPaths, WorkspaceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("could not create scratch directory {path}: {source}")]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

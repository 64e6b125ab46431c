use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;

use crate::application::ports::{
    ArtifactPaths, AudioTranscoder, AudioWorkspace, LipSyncAnalyzer, LipSyncError,
    SpeechSynthesizer, SynthesisError, TranscodeError, WorkspaceError,
};
use crate::domain::{ArtifactKind, LipSyncDocument, ReplyMessage};

/// Turns a line of text into MP3 audio plus lip-sync cues:
/// synthesize, write mp3, transcode to wav, analyze.
pub struct VoiceLineRenderer {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    transcoder: Arc<dyn AudioTranscoder>,
    lip_sync_analyzer: Arc<dyn LipSyncAnalyzer>,
    workspace: Arc<dyn AudioWorkspace>,
}

#[derive(Debug, Clone)]
pub struct RenderedSpeech {
    pub audio: Bytes,
    pub lipsync: LipSyncDocument,
    pub paths: ArtifactPaths,
}

impl VoiceLineRenderer {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        transcoder: Arc<dyn AudioTranscoder>,
        lip_sync_analyzer: Arc<dyn LipSyncAnalyzer>,
        workspace: Arc<dyn AudioWorkspace>,
    ) -> Self {
        Self {
            synthesizer,
            transcoder,
            lip_sync_analyzer,
            workspace,
        }
    }

    #[tracing::instrument(skip(self, text, kind), fields(kind = kind.as_str(), chars = text.len()))]
    pub async fn render(
        &self,
        text: &str,
        kind: ArtifactKind,
    ) -> Result<RenderedSpeech, RenderError> {
        let started = Instant::now();

        let audio = self.synthesizer.synthesize(text).await?;
        let paths = self.workspace.store_audio(kind, &audio).await?;
        tracing::debug!(path = %paths.mp3.display(), bytes = audio.len(), "Generated MP3 file");

        self.transcoder.transcode(&paths.mp3, &paths.wav).await?;
        tracing::debug!(path = %paths.wav.display(), "Converted MP3 to WAV");

        let lipsync = self.lip_sync_analyzer.analyze(&paths.wav).await?;

        tracing::info!(
            stem = %paths.stem,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Lip sync done"
        );

        Ok(RenderedSpeech {
            audio,
            lipsync,
            paths,
        })
    }

    /// Renders `message.text` and attaches the result to the message.
    pub async fn speak(
        &self,
        message: ReplyMessage,
        kind: ArtifactKind,
    ) -> Result<ReplyMessage, RenderError> {
        let rendered = self.render(&message.text, kind).await?;
        Ok(message.with_speech(&rendered.audio, rendered.lipsync))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("synthesis: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("workspace: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error("transcoding: {0}")]
    Transcode(#[from] TranscodeError),
    #[error("lip sync: {0}")]
    LipSync(#[from] LipSyncError),
}

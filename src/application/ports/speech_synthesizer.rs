use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Returns compressed (MP3) audio for `text`.
    async fn synthesize(&self, text: &str) -> Result<Bytes, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("speech synthesis failed: {0}")]
    ApiRequestFailed(String),
    #[error("speech synthesis returned no audio")]
    EmptyAudio,
}

use std::path::Path;

use bytes::Bytes;
use serde_json::json;

use crate::application::ports::{
    AudioTranscoder, LipSyncAnalyzer, LipSyncError, SpeechSynthesizer, SynthesisError,
    TranscodeError, TranscriptionEngine, TranscriptionError,
};
use crate::domain::LipSyncDocument;

pub const MOCK_MP3_BYTES: &[u8] = b"ID3\x04\x00\x00mock-mp3-frames";

pub struct MockSpeechSynthesizer;

#[async_trait::async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<Bytes, SynthesisError> {
        Ok(Bytes::from_static(MOCK_MP3_BYTES))
    }
}

pub struct FailingSpeechSynthesizer;

#[async_trait::async_trait]
impl SpeechSynthesizer for FailingSpeechSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<Bytes, SynthesisError> {
        Err(SynthesisError::ApiRequestFailed("status 401: invalid key".to_string()))
    }
}

pub struct MockAudioTranscoder;

#[async_trait::async_trait]
impl AudioTranscoder for MockAudioTranscoder {
    async fn transcode(&self, _input: &Path, _output: &Path) -> Result<String, TranscodeError> {
        Ok(String::new())
    }
}

pub struct MockLipSyncAnalyzer;

#[async_trait::async_trait]
impl LipSyncAnalyzer for MockLipSyncAnalyzer {
    async fn analyze(&self, wav_path: &Path) -> Result<LipSyncDocument, LipSyncError> {
        Ok(LipSyncDocument::new(json!({
            "metadata": {
                "soundFile": wav_path.display().to_string(),
                "duration": 0.5
            },
            "mouthCues": [
                { "start": 0.0, "end": 0.25, "value": "B" },
                { "start": 0.25, "end": 0.5, "value": "X" }
            ]
        })))
    }
}

pub struct MockTranscriptionEngine;

#[async_trait::async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(&self, audio_data: &[u8]) -> Result<String, TranscriptionError> {
        if audio_data.is_empty() {
            return Err(TranscriptionError::EmptyAudio);
        }
        Ok("Mock transcript".to_string())
    }
}

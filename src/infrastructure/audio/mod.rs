mod azure_speech_engine;
mod command;
mod ffmpeg_transcoder;
mod mock_audio;
mod openai_speech_synthesizer;
mod rhubarb_lip_sync;

pub use azure_speech_engine::AzureSpeechEngine;
pub use ffmpeg_transcoder::FfmpegTranscoder;
pub use mock_audio::{
    FailingSpeechSynthesizer, MOCK_MP3_BYTES, MockAudioTranscoder, MockLipSyncAnalyzer,
    MockSpeechSynthesizer, MockTranscriptionEngine,
};
pub use openai_speech_synthesizer::OpenAiSpeechSynthesizer;
pub use rhubarb_lip_sync::{EXTENDED_SHAPES, PHONETIC_RECOGNIZER, RhubarbLipSyncAnalyzer};

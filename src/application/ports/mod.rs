mod audio_transcoder;
mod audio_workspace;
mod lip_sync_analyzer;
mod llm_client;
mod price_predictor;
mod speech_synthesizer;
mod transcription_engine;

pub use audio_transcoder::{AudioTranscoder, TranscodeError};
pub use audio_workspace::{ArtifactPaths, AudioWorkspace, WorkspaceError};
pub use lip_sync_analyzer::{LipSyncAnalyzer, LipSyncError};
pub use llm_client::{LlmClient, LlmClientError};
pub use price_predictor::{PredictionError, PricePredictor};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};

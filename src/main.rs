use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use virtual_avatar::application::ports::{
    AudioTranscoder, AudioWorkspace, LipSyncAnalyzer, PricePredictor, SpeechSynthesizer,
    TranscriptionEngine,
};
use virtual_avatar::application::services::{AvatarService, VoiceLineRenderer};
use virtual_avatar::infrastructure::audio::{
    AzureSpeechEngine, FfmpegTranscoder, OpenAiSpeechSynthesizer, RhubarbLipSyncAnalyzer,
};
use virtual_avatar::infrastructure::llm::OpenAiClient;
use virtual_avatar::infrastructure::observability::{TracingConfig, init_tracing};
use virtual_avatar::infrastructure::prediction::HttpPricePredictor;
use virtual_avatar::infrastructure::storage::LocalAudioWorkspace;
use virtual_avatar::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load().context("Failed to load settings")?;
    settings
        .validate()
        .context("Missing required configuration")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let synthesizer: Arc<dyn SpeechSynthesizer> = Arc::new(OpenAiSpeechSynthesizer::new(
        settings.tts.api_key.clone(),
        settings.tts.base_url.clone(),
        Some(settings.tts.model.clone()),
        Some(settings.tts.voice.clone()),
    ));
    let transcoder: Arc<dyn AudioTranscoder> =
        Arc::new(FfmpegTranscoder::new(&settings.audio.ffmpeg_path));
    let lip_sync_analyzer: Arc<dyn LipSyncAnalyzer> = Arc::new(
        RhubarbLipSyncAnalyzer::new(&settings.audio.rhubarb_path)
            .with_recognizer(settings.audio.rhubarb_recognizer.clone())
            .with_extended_shapes(settings.audio.rhubarb_extended_shapes.clone()),
    );
    let workspace: Arc<dyn AudioWorkspace> =
        Arc::new(LocalAudioWorkspace::new(&settings.audio.scratch_dir));

    let renderer = Arc::new(VoiceLineRenderer::new(
        synthesizer,
        transcoder,
        lip_sync_analyzer,
        workspace,
    ));

    let price_predictor: Arc<dyn PricePredictor> =
        Arc::new(HttpPricePredictor::new(settings.prediction.url.clone()));

    let avatar_service = Arc::new(AvatarService::new(
        Arc::new(OpenAiClient::from_settings(&settings.llm)),
        price_predictor,
        renderer,
        settings.llm.system_prompt.clone(),
    ));

    let transcription_engine: Arc<dyn TranscriptionEngine> = match &settings.speech.base_url {
        Some(base_url) => Arc::new(AzureSpeechEngine::with_base_url(
            base_url,
            &settings.speech.key,
            &settings.speech.language,
        )),
        None => Arc::new(AzureSpeechEngine::new(
            &settings.speech.region,
            &settings.speech.key,
            &settings.speech.language,
        )),
    };

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState {
        avatar_service,
        transcription_engine,
    };

    let router = create_router(state);

    tracing::info!("Virtual Avatar listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

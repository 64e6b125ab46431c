use axum::Router;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::json;
use std::collections::HashMap;

use virtual_avatar::application::ports::{TranscriptionEngine, TranscriptionError};
use virtual_avatar::infrastructure::audio::AzureSpeechEngine;

use crate::mock_server::start_mock_server;

const RECOGNITION_PATH: &str = "/speech/recognition/conversation/cognitiveservices/v1";

#[tokio::test]
async fn given_successful_recognition_when_transcribing_then_returns_trimmed_display_text() {
    let app = Router::new().route(
        RECOGNITION_PATH,
        post(
            |headers: HeaderMap, Query(query): Query<HashMap<String, String>>| async move {
                let keyed = headers
                    .get("Ocp-Apim-Subscription-Key")
                    .and_then(|v| v.to_str().ok())
                    == Some("speech-key");
                if !keyed || query.get("language").map(String::as_str) != Some("en-US") {
                    return StatusCode::UNAUTHORIZED.into_response();
                }
                axum::Json(json!({
                    "RecognitionStatus": "Success",
                    "DisplayText": "  Hello Ruby.  ",
                    "Offset": 0,
                    "Duration": 1000
                }))
                .into_response()
            },
        ),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let engine = AzureSpeechEngine::with_base_url(&base_url, "speech-key", "en-US");
    let result = engine.transcribe(b"RIFF fake wav").await;

    assert_eq!(result.unwrap(), "Hello Ruby.");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_no_match_status_when_transcribing_then_returns_recognition_failed() {
    let app = Router::new().route(
        RECOGNITION_PATH,
        post(|| async { axum::Json(json!({"RecognitionStatus": "NoMatch"})) }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let engine = AzureSpeechEngine::with_base_url(&base_url, "speech-key", "en-US");
    let result = engine.transcribe(b"RIFF silence").await;

    match result {
        Err(TranscriptionError::RecognitionFailed(status)) => assert_eq!(status, "NoMatch"),
        other => panic!("expected RecognitionFailed, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rejected_key_when_transcribing_then_returns_api_request_failed() {
    let app = Router::new().route(
        RECOGNITION_PATH,
        post(|| async { (StatusCode::UNAUTHORIZED, "invalid subscription key") }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let engine = AzureSpeechEngine::with_base_url(&base_url, "wrong", "en-US");
    let result = engine.transcribe(b"RIFF").await;

    assert!(matches!(result, Err(TranscriptionError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_audio_when_transcribing_then_returns_empty_audio_without_request() {
    let engine = AzureSpeechEngine::with_base_url("http://127.0.0.1:9", "key", "en-US");

    let result = engine.transcribe(&[]).await;

    assert!(matches!(result, Err(TranscriptionError::EmptyAudio)));
}

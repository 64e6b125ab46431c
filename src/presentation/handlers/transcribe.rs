use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{LlmClient, TranscriptionError};
use crate::presentation::state::AppState;

use super::chat::ErrorResponse;

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub text: String,
}

fn error_response(status: StatusCode, error: String) -> axum::response::Response {
    (status, Json(ErrorResponse { error })).into_response()
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<L>(
    State(state): State<AppState<L>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Transcription request with no audio");
            return error_response(StatusCode::BAD_REQUEST, "No audio uploaded".to_string());
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read multipart: {}", e),
            );
        }
    };

    let audio = match field.bytes().await {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read audio bytes");
            return error_response(StatusCode::BAD_REQUEST, format!("Failed to read audio: {}", e));
        }
    };

    tracing::debug!(bytes = audio.len(), "Audio received for transcription");

    match state.transcription_engine.transcribe(&audio).await {
        Ok(text) => (StatusCode::OK, Json(TranscribeResponse { text })).into_response(),
        Err(TranscriptionError::EmptyAudio) => {
            error_response(StatusCode::BAD_REQUEST, "Audio is empty".to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "Transcription failed");
            error_response(StatusCode::BAD_GATEWAY, format!("Transcription failed: {}", e))
        }
    }
}

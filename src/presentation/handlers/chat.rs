use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::domain::ReplyMessage;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub messages: Vec<ReplyMessage>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn chat_handler<L>(
    State(state): State<AppState<L>>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    match state
        .avatar_service
        .respond(request.message.as_deref())
        .await
    {
        Ok(messages) => {
            tracing::info!(messages = messages.len(), "Chat reply ready");
            (StatusCode::OK, Json(ChatResponse { messages })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Chat request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error".to_string(),
                }),
            )
                .into_response()
        }
    }
}

use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::{Value, json};

use virtual_avatar::application::ports::{LlmClient, LlmClientError};
use virtual_avatar::infrastructure::llm::OpenAiClient;

use crate::mock_server::start_mock_server;

fn client_for(base_url: &str) -> OpenAiClient {
    OpenAiClient::new(
        "test-key".to_string(),
        Some(format!("{}/v1", base_url)),
        "gpt-4".to_string(),
        1000,
        1.0,
    )
}

#[tokio::test]
async fn given_successful_completion_when_completing_then_returns_first_choice_content() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|headers: HeaderMap, axum::Json(body): axum::Json<Value>| async move {
            let authorized = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                == Some("Bearer test-key");
            let shaped = body["messages"][0]["role"] == "system"
                && body["messages"][1]["content"] == "Hello Ruby"
                && body["model"] == "gpt-4"
                && body["max_tokens"] == 1000;
            if !(authorized && shaped) {
                return StatusCode::BAD_REQUEST.into_response();
            }
            axum::Json(json!({
                "choices": [{"message": {"role": "assistant", "content": "[{\"text\":\"Hi\"}]"}}]
            }))
            .into_response()
        }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let result = client_for(&base_url)
        .complete("system prompt", "Hello Ruby")
        .await;

    assert_eq!(result.unwrap(), "[{\"text\":\"Hi\"}]");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limited_api_when_completing_then_returns_rate_limited() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|| async { StatusCode::TOO_MANY_REQUESTS }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let result = client_for(&base_url).complete("system", "hi").await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_completing_then_returns_api_request_failed() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let result = client_for(&base_url).complete("system", "hi").await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_when_completing_then_returns_invalid_response() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|| async { axum::Json(json!({"choices": []})) }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let result = client_for(&base_url).complete("system", "hi").await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

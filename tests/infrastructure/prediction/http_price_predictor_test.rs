use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::{Value, json};

use virtual_avatar::application::ports::{PredictionError, PricePredictor};
use virtual_avatar::domain::Ticker;
use virtual_avatar::infrastructure::prediction::HttpPricePredictor;

use crate::mock_server::start_mock_server;

fn ticker(raw: &str) -> Ticker {
    Ticker::parse(raw).unwrap()
}

#[tokio::test]
async fn given_prediction_service_answers_when_predicting_then_returns_price() {
    let app = Router::new().route(
        "/predict",
        post(|axum::Json(body): axum::Json<Value>| async move {
            if body["ticker"] != "AAPL" {
                return StatusCode::BAD_REQUEST.into_response();
            }
            axum::Json(json!({"predicted_prices": 187.456})).into_response()
        }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let price = HttpPricePredictor::new(format!("{}/predict", base_url))
        .predict(&ticker("aapl"))
        .await
        .unwrap();

    assert!((price - 187.456).abs() < f64::EPSILON);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_service_error_when_predicting_then_returns_unsuccessful_status() {
    let app = Router::new().route(
        "/predict",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model crashed") }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let result = HttpPricePredictor::new(format!("{}/predict", base_url))
        .predict(&ticker("MSFT"))
        .await;

    match result {
        Err(PredictionError::UnsuccessfulStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "model crashed");
        }
        other => panic!("expected UnsuccessfulStatus, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_response_without_price_when_predicting_then_returns_invalid_response() {
    let app = Router::new().route(
        "/predict",
        post(|| async { axum::Json(json!({"error": "unknown ticker"})) }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let result = HttpPricePredictor::new(format!("{}/predict", base_url))
        .predict(&ticker("ZZZZ"))
        .await;

    assert!(matches!(result, Err(PredictionError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_service_when_predicting_then_returns_request_failed() {
    let result = HttpPricePredictor::new("http://127.0.0.1:9/predict")
        .predict(&ticker("AAPL"))
        .await;

    assert!(matches!(result, Err(PredictionError::RequestFailed(_))));
}

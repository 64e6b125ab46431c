use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{PredictionError, PricePredictor};
use crate::domain::Ticker;

pub const DEFAULT_PREDICTION_URL: &str = "http://127.0.0.1:5000/predict";

/// Client for the stock prediction service (`POST /predict {"ticker": ...}`).
pub struct HttpPricePredictor {
    client: Client,
    url: String,
}

#[derive(Serialize)]
struct PredictionRequest<'a> {
    ticker: &'a str,
}

#[derive(Deserialize)]
struct PredictionResponse {
    #[serde(default)]
    predicted_prices: Option<f64>,
}

impl HttpPricePredictor {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl PricePredictor for HttpPricePredictor {
    async fn predict(&self, ticker: &Ticker) -> Result<f64, PredictionError> {
        tracing::debug!(url = %self.url, ticker = %ticker, "Requesting price prediction");

        let response = self
            .client
            .post(&self.url)
            .json(&PredictionRequest {
                ticker: ticker.as_str(),
            })
            .send()
            .await
            .map_err(|e| PredictionError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(PredictionError::UnsuccessfulStatus { status, body });
        }

        let prediction: PredictionResponse = response
            .json()
            .await
            .map_err(|e| PredictionError::InvalidResponse(e.to_string()))?;

        prediction
            .predicted_prices
            .filter(|price| price.is_finite())
            .ok_or_else(|| PredictionError::InvalidResponse("missing predicted_prices".to_string()))
    }
}

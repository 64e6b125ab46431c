use async_trait::async_trait;

use crate::domain::Ticker;

#[async_trait]
pub trait PricePredictor: Send + Sync {
    async fn predict(&self, ticker: &Ticker) -> Result<f64, PredictionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("prediction request failed: {0}")]
    RequestFailed(String),
    #[error("prediction service returned HTTP {status}: {body}")]
    UnsuccessfulStatus { status: u16, body: String },
    #[error("invalid prediction response: {0}")]
    InvalidResponse(String),
}

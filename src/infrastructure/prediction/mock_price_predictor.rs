use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{PredictionError, PricePredictor};
use crate::domain::Ticker;

/// Returns a fixed price, or fails when built with [`MockPricePredictor::failing`].
/// Counts how often it was asked.
pub struct MockPricePredictor {
    price: Option<f64>,
    calls: AtomicUsize,
}

impl MockPricePredictor {
    pub fn returning(price: f64) -> Self {
        Self {
            price: Some(price),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            price: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PricePredictor for MockPricePredictor {
    async fn predict(&self, _ticker: &Ticker) -> Result<f64, PredictionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.price.ok_or_else(|| PredictionError::UnsuccessfulStatus {
            status: 500,
            body: "model unavailable".to_string(),
        })
    }
}

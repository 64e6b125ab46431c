mod http_price_predictor;
mod mock_price_predictor;

pub use http_price_predictor::{DEFAULT_PREDICTION_URL, HttpPricePredictor};
pub use mock_price_predictor::MockPricePredictor;

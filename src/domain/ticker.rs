use std::fmt;

/// Upper-cased symbol of a tradable instrument, e.g. `AAPL`, `BRK.B`, `^GSPC`
/// or `EURUSD=X`. Whether the symbol exists is up to the prediction service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TickerError {
    #[error("ticker is empty")]
    Empty,
    #[error("invalid character in ticker: {0:?}")]
    InvalidCharacter(char),
}

impl Ticker {
    pub fn parse(raw: &str) -> Result<Self, TickerError> {
        let symbol = raw.trim().to_uppercase();

        if symbol.is_empty() {
            return Err(TickerError::Empty);
        }
        if let Some(c) = symbol
            .chars()
            .find(|c| c.is_whitespace() || c.is_control())
        {
            return Err(TickerError::InvalidCharacter(c));
        }

        Ok(Self(symbol))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

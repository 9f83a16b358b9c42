//! Domain error types.

/// Top-level error type for papertrader.
#[derive(Debug, thiserror::Error)]
pub enum PaperTraderError {
    #[error("stock not found: {ticker}")]
    StockNotFound { ticker: String },

    #[error("not enough shares of {ticker} to sell: hold {held}, requested {requested}")]
    InsufficientShares {
        ticker: String,
        held: i64,
        requested: i64,
    },

    #[error("quantity out of range for {ticker}: hold {held}, change {quantity}")]
    QuantityOverflow {
        ticker: String,
        held: i64,
        quantity: i64,
    },

    #[error("invalid number: {input:?}")]
    InvalidNumber { input: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("catalog error: {reason}")]
    Catalog { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&PaperTraderError> for std::process::ExitCode {
    fn from(err: &PaperTraderError) -> Self {
        let code: u8 = match err {
            PaperTraderError::Io(_) => 1,
            PaperTraderError::ConfigParse { .. }
            | PaperTraderError::ConfigInvalid { .. }
            | PaperTraderError::Catalog { .. } => 2,
            PaperTraderError::InvalidNumber { .. } => 3,
            PaperTraderError::StockNotFound { .. }
            | PaperTraderError::InsufficientShares { .. }
            | PaperTraderError::QuantityOverflow { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}

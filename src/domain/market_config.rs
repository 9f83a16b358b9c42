//! Market configuration: where the catalog comes from and how it is adjusted
//! before trading starts.
//!
//! ```ini
//! [market]
//! catalog = market.csv
//! tickers = AAPL, AMZN
//!
//! [prices]
//! AAPL = 155.5
//!
//! [logging]
//! level = info
//! ```

use std::path::PathBuf;

use crate::domain::catalog::{Catalog, parse_tickers};
use crate::domain::error::PaperTraderError;
use crate::domain::instrument::ticker_key;
use crate::ports::config_port::ConfigPort;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketConfig {
    pub catalog_path: Option<PathBuf>,
    pub tickers: Option<Vec<String>>,
    pub price_overrides: Vec<(String, f64)>,
    pub log_level: Option<String>,
}

impl MarketConfig {
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, PaperTraderError> {
        let catalog_path = non_empty(config.get_string("market", "catalog")).map(PathBuf::from);

        let tickers = match non_empty(config.get_string("market", "tickers")) {
            Some(list) => Some(parse_tickers(&list).map_err(|e| {
                PaperTraderError::ConfigInvalid {
                    section: "market".into(),
                    key: "tickers".into(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        let mut keys = config.section_keys("prices");
        keys.sort();
        let mut price_overrides = Vec::with_capacity(keys.len());
        for key in keys {
            let raw = config.get_string("prices", &key).unwrap_or_default();
            let price = parse_price(&raw).ok_or_else(|| PaperTraderError::ConfigInvalid {
                section: "prices".into(),
                key: key.clone(),
                reason: format!("{raw:?} is not a non-negative number"),
            })?;
            price_overrides.push((ticker_key(&key), price));
        }

        Ok(MarketConfig {
            catalog_path,
            tickers,
            price_overrides,
            log_level: non_empty(config.get_string("logging", "level")),
        })
    }

    /// Apply the ticker selection and price overrides to a loaded catalog.
    pub fn apply(&self, catalog: Catalog) -> Result<Catalog, PaperTraderError> {
        let mut catalog = match &self.tickers {
            Some(tickers) => catalog.restrict_to(tickers)?,
            None => catalog,
        };

        for (ticker, price) in &self.price_overrides {
            if !catalog.update_price(ticker, *price) {
                return Err(PaperTraderError::ConfigInvalid {
                    section: "prices".into(),
                    key: ticker.clone(),
                    reason: format!("{ticker} is not in the catalog"),
                });
            }
        }

        Ok(catalog)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}

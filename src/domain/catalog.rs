//! Instrument catalog: the fixed, ordered set of tradable instruments.
//!
//! Lookups are case-insensitive on ticker. A failed lookup is an ordinary
//! `None`, never an error.

use std::collections::HashSet;

use crate::domain::error::PaperTraderError;
use crate::domain::instrument::{Instrument, ticker_key};

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    instruments: Vec<Instrument>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate tickers and unusable prices.
    pub fn new(instruments: Vec<Instrument>) -> Result<Self, PaperTraderError> {
        let mut seen = HashSet::new();
        for inst in &instruments {
            let key = inst.key();
            if key.is_empty() {
                return Err(PaperTraderError::Catalog {
                    reason: format!("empty ticker for {:?}", inst.name),
                });
            }
            if !seen.insert(key.clone()) {
                return Err(PaperTraderError::Catalog {
                    reason: format!("duplicate ticker: {key}"),
                });
            }
            if !inst.price.is_finite() || inst.price < 0.0 {
                return Err(PaperTraderError::Catalog {
                    reason: format!("invalid price for {key}: {}", inst.price),
                });
            }
        }
        Ok(Catalog { instruments })
    }

    /// The default market seeded at startup.
    pub fn builtin() -> Self {
        Catalog {
            instruments: vec![
                Instrument::new("AAPL", "Apple Inc.", 150.00),
                Instrument::new("GOOGL", "Alphabet Inc.", 2800.00),
                Instrument::new("AMZN", "Amazon.com Inc.", 3400.00),
            ],
        }
    }

    pub fn find_by_ticker(&self, ticker: &str) -> Option<&Instrument> {
        let ticker = ticker.trim();
        self.instruments.iter().find(|inst| inst.matches(ticker))
    }

    pub fn find_by_ticker_mut(&mut self, ticker: &str) -> Option<&mut Instrument> {
        let ticker = ticker.trim();
        self.instruments.iter_mut().find(|inst| inst.matches(ticker))
    }

    /// Instruments in insertion order.
    pub fn list(&self) -> &[Instrument] {
        &self.instruments
    }

    /// Overwrite the price of `ticker`. Returns false if the ticker is unknown.
    pub fn update_price(&mut self, ticker: &str, new_price: f64) -> bool {
        match self.find_by_ticker_mut(ticker) {
            Some(inst) => {
                inst.update_price(new_price);
                true
            }
            None => false,
        }
    }

    /// Keep only `tickers`, in the order given.
    pub fn restrict_to(self, tickers: &[String]) -> Result<Self, PaperTraderError> {
        let mut selected = Vec::with_capacity(tickers.len());
        for ticker in tickers {
            let inst = self.find_by_ticker(ticker).ok_or_else(|| {
                PaperTraderError::ConfigInvalid {
                    section: "market".into(),
                    key: "tickers".into(),
                    reason: format!("{ticker} is not in the catalog"),
                }
            })?;
            selected.push(inst.clone());
        }
        Ok(Catalog {
            instruments: selected,
        })
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TickerListError {
    #[error("empty token in ticker list")]
    EmptyToken,

    #[error("duplicate ticker: {0}")]
    DuplicateTicker(String),
}

/// Parse a comma separated ticker list, uppercasing each entry.
pub fn parse_tickers(input: &str) -> Result<Vec<String>, TickerListError> {
    let mut tickers = Vec::new();
    let mut seen = HashSet::new();

    for token in input.split(',') {
        let ticker = ticker_key(token);
        if ticker.is_empty() {
            return Err(TickerListError::EmptyToken);
        }
        if !seen.insert(ticker.clone()) {
            return Err(TickerListError::DuplicateTicker(ticker));
        }
        tickers.push(ticker);
    }

    Ok(tickers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_three_instruments_in_order() {
        let catalog = Catalog::builtin();
        let tickers: Vec<&str> = catalog.list().iter().map(|i| i.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["AAPL", "GOOGL", "AMZN"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn find_by_ticker_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let upper = catalog.find_by_ticker("AAPL").unwrap();
        let lower = catalog.find_by_ticker("aapl").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.name, "Apple Inc.");
    }

    #[test]
    fn find_by_ticker_trims_input() {
        let catalog = Catalog::builtin();
        assert!(catalog.find_by_ticker("  googl \n").is_some());
    }

    #[test]
    fn find_by_ticker_unknown() {
        let catalog = Catalog::builtin();
        assert!(catalog.find_by_ticker("TSLA").is_none());
        assert!(catalog.find_by_ticker("").is_none());
    }

    #[test]
    fn update_price_known_ticker() {
        let mut catalog = Catalog::builtin();
        assert!(catalog.update_price("amzn", 3500.0));
        let amzn = catalog.find_by_ticker("AMZN").unwrap();
        assert!((amzn.price - 3500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn update_price_unknown_ticker() {
        let mut catalog = Catalog::builtin();
        let before = catalog.clone();
        assert!(!catalog.update_price("TSLA", 1.0));
        assert_eq!(catalog, before);
    }

    #[test]
    fn new_rejects_duplicate_ticker() {
        let result = Catalog::new(vec![
            Instrument::new("AAPL", "Apple Inc.", 150.0),
            Instrument::new("aapl", "Apple again", 151.0),
        ]);
        assert!(
            matches!(result, Err(PaperTraderError::Catalog { reason }) if reason.contains("AAPL"))
        );
    }

    #[test]
    fn new_rejects_negative_price() {
        let result = Catalog::new(vec![Instrument::new("BHP", "BHP Group", -1.0)]);
        assert!(matches!(result, Err(PaperTraderError::Catalog { .. })));
    }

    #[test]
    fn new_rejects_nan_price() {
        let result = Catalog::new(vec![Instrument::new("BHP", "BHP Group", f64::NAN)]);
        assert!(matches!(result, Err(PaperTraderError::Catalog { .. })));
    }

    #[test]
    fn new_accepts_empty() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn restrict_to_reorders_and_filters() {
        let catalog = Catalog::builtin()
            .restrict_to(&["AMZN".to_string(), "AAPL".to_string()])
            .unwrap();
        let tickers: Vec<&str> = catalog.list().iter().map(|i| i.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["AMZN", "AAPL"]);
    }

    #[test]
    fn restrict_to_unknown_ticker() {
        let result = Catalog::builtin().restrict_to(&["TSLA".to_string()]);
        assert!(
            matches!(result, Err(PaperTraderError::ConfigInvalid { key, .. }) if key == "tickers")
        );
    }

    #[test]
    fn parse_tickers_basic() {
        let result = parse_tickers("AAPL,GOOGL,AMZN").unwrap();
        assert_eq!(result, vec!["AAPL", "GOOGL", "AMZN"]);
    }

    #[test]
    fn parse_tickers_whitespace_and_case() {
        let result = parse_tickers("  aapl , Googl ,AMZN ").unwrap();
        assert_eq!(result, vec!["AAPL", "GOOGL", "AMZN"]);
    }

    #[test]
    fn parse_tickers_empty_token() {
        let result = parse_tickers("AAPL,,AMZN");
        assert!(matches!(result, Err(TickerListError::EmptyToken)));
    }

    #[test]
    fn parse_tickers_duplicate() {
        let result = parse_tickers("AAPL,AMZN,aapl");
        assert!(matches!(result, Err(TickerListError::DuplicateTicker(s)) if s == "AAPL"));
    }
}

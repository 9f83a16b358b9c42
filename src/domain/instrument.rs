//! Tradable instrument representation.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    pub ticker: String,
    pub name: String,
    pub price: f64,
}

impl Instrument {
    pub fn new(ticker: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Instrument {
            ticker: ticker.into(),
            name: name.into(),
            price,
        }
    }

    /// Case-insensitive ticker comparison.
    pub fn matches(&self, ticker: &str) -> bool {
        self.ticker.eq_ignore_ascii_case(ticker)
    }

    /// Ledger key for this instrument.
    pub fn key(&self) -> String {
        ticker_key(&self.ticker)
    }

    pub fn update_price(&mut self, new_price: f64) {
        self.price = new_price;
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - ${}",
            self.ticker,
            self.name,
            format_amount(self.price)
        )
    }
}

/// Normalised map key for a ticker.
pub fn ticker_key(ticker: &str) -> String {
    ticker.trim().to_ascii_uppercase()
}

/// Render a dollar amount with at least one fractional digit (`150.0`, `1050.5`).
pub fn format_amount(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_instrument() -> Instrument {
        Instrument::new("AAPL", "Apple Inc.", 150.0)
    }

    #[test]
    fn display_format() {
        assert_eq!(sample_instrument().to_string(), "AAPL (Apple Inc.) - $150.0");
    }

    #[test]
    fn display_keeps_fraction() {
        let inst = Instrument::new("BHP", "BHP Group", 45.25);
        assert_eq!(inst.to_string(), "BHP (BHP Group) - $45.25");
    }

    #[test]
    fn matches_ignores_case() {
        let inst = sample_instrument();
        assert!(inst.matches("AAPL"));
        assert!(inst.matches("aapl"));
        assert!(inst.matches("AaPl"));
        assert!(!inst.matches("AAP"));
        assert!(!inst.matches("AAPLX"));
    }

    #[test]
    fn update_price_overwrites() {
        let mut inst = sample_instrument();
        inst.update_price(175.5);
        assert!((inst.price - 175.5).abs() < f64::EPSILON);

        // no validation on the new value
        inst.update_price(-1.0);
        assert!((inst.price - (-1.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn key_is_uppercase() {
        let inst = Instrument::new("googl", "Alphabet Inc.", 2800.0);
        assert_eq!(inst.key(), "GOOGL");
        assert_eq!(ticker_key("  amzn "), "AMZN");
    }

    #[test]
    fn format_amount_whole_and_fractional() {
        assert_eq!(format_amount(1500.0), "1500.0");
        assert_eq!(format_amount(1050.5), "1050.5");
        assert_eq!(format_amount(0.0), "0.0");
    }
}

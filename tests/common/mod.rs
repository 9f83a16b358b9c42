#![allow(dead_code)]

use papertrader::domain::catalog::Catalog;
use papertrader::domain::error::PaperTraderError;
use papertrader::domain::instrument::Instrument;
use papertrader::domain::session::TradingSession;
use papertrader::ports::catalog_port::CatalogPort;
use papertrader::shell::Shell;
use std::io::{Cursor, Write};

pub struct MockCatalogPort {
    pub instruments: Vec<Instrument>,
    pub error: Option<String>,
}

impl MockCatalogPort {
    pub fn new() -> Self {
        Self {
            instruments: Vec::new(),
            error: None,
        }
    }

    pub fn with_instrument(mut self, ticker: &str, name: &str, price: f64) -> Self {
        self.instruments.push(Instrument::new(ticker, name, price));
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl CatalogPort for MockCatalogPort {
    fn load_instruments(&self) -> Result<Vec<Instrument>, PaperTraderError> {
        if let Some(reason) = &self.error {
            return Err(PaperTraderError::Catalog {
                reason: reason.clone(),
            });
        }
        Ok(self.instruments.clone())
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

/// The three-instrument market used throughout the scenarios.
pub fn scenario_catalog() -> Catalog {
    Catalog::new(vec![
        Instrument::new("AAPL", "Apple Inc.", 150.0),
        Instrument::new("GOOGL", "Alphabet Inc.", 2800.0),
        Instrument::new("AMZN", "Amazon.com Inc.", 3400.0),
    ])
    .unwrap()
}

pub fn scenario_session() -> TradingSession {
    TradingSession::new(scenario_catalog())
}

/// Drive the menu loop with `script` as stdin and return what it printed.
pub fn run_shell(
    session: &mut TradingSession,
    script: &str,
) -> (Result<(), PaperTraderError>, String) {
    let mut shell = Shell::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let result = shell.run(session);
    let output = String::from_utf8(shell.into_output()).unwrap();
    (result, output)
}

pub fn write_temp_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

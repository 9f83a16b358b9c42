//! Trading session: the single owner of the catalog and the ledger.

use tracing::{debug, info};

use super::catalog::Catalog;
use super::error::PaperTraderError;
use super::instrument::Instrument;
use super::ledger::{Ledger, LedgerError};

/// Outcome of a successful buy or sell.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub ticker: String,
    pub quantity: i64,
    pub held_after: i64,
}

#[derive(Debug, Clone)]
pub struct TradingSession {
    catalog: Catalog,
    ledger: Ledger,
}

impl TradingSession {
    pub fn new(catalog: Catalog) -> Self {
        TradingSession {
            catalog,
            ledger: Ledger::new(),
        }
    }

    pub fn market(&self) -> &Catalog {
        &self.catalog
    }

    pub fn market_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn resolve(&self, ticker: &str) -> Result<&Instrument, PaperTraderError> {
        lookup(&self.catalog, ticker)
    }

    pub fn buy(&mut self, ticker: &str, quantity: i64) -> Result<Fill, PaperTraderError> {
        let instrument = lookup(&self.catalog, ticker)?;
        let held_after = self.ledger.buy(instrument, quantity).map_err(ledger_error)?;
        info!(ticker = %instrument.ticker, quantity, held_after, "buy filled");
        Ok(Fill {
            ticker: instrument.ticker.clone(),
            quantity,
            held_after,
        })
    }

    pub fn sell(&mut self, ticker: &str, quantity: i64) -> Result<Fill, PaperTraderError> {
        let instrument = lookup(&self.catalog, ticker)?;
        match self.ledger.sell(instrument, quantity) {
            Ok(held_after) => {
                info!(ticker = %instrument.ticker, quantity, held_after, "sell filled");
                Ok(Fill {
                    ticker: instrument.ticker.clone(),
                    quantity,
                    held_after,
                })
            }
            Err(e) => {
                debug!(ticker = %instrument.ticker, quantity, error = %e, "sell rejected");
                Err(ledger_error(e))
            }
        }
    }

    pub fn holdings(&self) -> Vec<(&Instrument, i64)> {
        self.ledger.list_holdings(&self.catalog)
    }

    pub fn portfolio_value(&self) -> f64 {
        self.ledger.total_value(&self.catalog)
    }
}

fn lookup<'a>(catalog: &'a Catalog, ticker: &str) -> Result<&'a Instrument, PaperTraderError> {
    catalog
        .find_by_ticker(ticker)
        .ok_or_else(|| PaperTraderError::StockNotFound {
            ticker: ticker.trim().to_string(),
        })
}

fn ledger_error(err: LedgerError) -> PaperTraderError {
    match err {
        LedgerError::InsufficientShares {
            ticker,
            held,
            requested,
        } => PaperTraderError::InsufficientShares {
            ticker,
            held,
            requested,
        },
        LedgerError::QuantityOverflow {
            ticker,
            held,
            quantity,
        } => PaperTraderError::QuantityOverflow {
            ticker,
            held,
            quantity,
        },
    }
}

impl Default for TradingSession {
    fn default() -> Self {
        TradingSession::new(Catalog::builtin())
    }
}

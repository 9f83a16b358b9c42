//! Holding ledger: held quantity per instrument.
//!
//! Entries are keyed by uppercased ticker. The ledger stores quantities
//! only; prices always come from the [`Catalog`].

use std::collections::HashMap;

use super::catalog::Catalog;
use super::instrument::{Instrument, ticker_key};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("not enough shares of {ticker}: hold {held}, requested {requested}")]
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
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    holdings: HashMap<String, i64>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger {
            holdings: HashMap::new(),
        }
    }

    /// Add `quantity` to the holding and return the new amount.
    ///
    /// No positivity check: zero and negative quantities are applied as-is.
    /// A result of exactly zero leaves no entry behind. A result outside the
    /// `i64` range is rejected and the ledger is left unchanged.
    pub fn buy(&mut self, instrument: &Instrument, quantity: i64) -> Result<i64, LedgerError> {
        let key = instrument.key();
        let current = self.holdings.get(&key).copied().unwrap_or(0);
        let Some(held) = current.checked_add(quantity) else {
            return Err(LedgerError::QuantityOverflow {
                ticker: key,
                held: current,
                quantity,
            });
        };
        if held == 0 {
            self.holdings.remove(&key);
        } else {
            self.holdings.insert(key, held);
        }
        Ok(held)
    }

    /// Remove `quantity` from the holding and return what remains.
    ///
    /// Fails without touching the ledger when there is no holding, it is
    /// smaller than `quantity`, or the remainder falls outside the `i64` range.
    pub fn sell(&mut self, instrument: &Instrument, quantity: i64) -> Result<i64, LedgerError> {
        let key = instrument.key();
        let held = match self.holdings.get(&key) {
            Some(&held) if held >= quantity => held,
            other => {
                return Err(LedgerError::InsufficientShares {
                    ticker: key,
                    held: other.copied().unwrap_or(0),
                    requested: quantity,
                });
            }
        };

        let Some(remaining) = held.checked_sub(quantity) else {
            return Err(LedgerError::QuantityOverflow {
                ticker: key,
                held,
                quantity,
            });
        };
        if remaining == 0 {
            self.holdings.remove(&key);
        } else {
            self.holdings.insert(key, remaining);
        }
        Ok(remaining)
    }

    pub fn quantity(&self, ticker: &str) -> Option<i64> {
        self.holdings.get(&ticker_key(ticker)).copied()
    }

    pub fn has_holding(&self, ticker: &str) -> bool {
        self.holdings.contains_key(&ticker_key(ticker))
    }

    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Holdings paired with their catalog instrument, in map order.
    pub fn list_holdings<'a>(&self, catalog: &'a Catalog) -> Vec<(&'a Instrument, i64)> {
        self.holdings
            .iter()
            .filter_map(|(ticker, &quantity)| {
                catalog.find_by_ticker(ticker).map(|inst| (inst, quantity))
            })
            .collect()
    }

    pub fn total_value(&self, catalog: &Catalog) -> f64 {
        self.list_holdings(catalog)
            .into_iter()
            .fold(0.0, |total, (inst, quantity)| total + inst.price * quantity as f64)
    }
}

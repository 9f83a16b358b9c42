//! Core domain types and logic.

pub mod instrument;
pub mod catalog;
pub mod ledger;
pub mod session;
pub mod market_config;
pub mod error;

//! papertrader — in-memory paper stock trading simulator.
//!
//! Domain logic in [`domain`], port traits in [`ports`], concrete
//! implementations in [`adapters`], the interactive menu in [`shell`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod shell;
pub mod cli;

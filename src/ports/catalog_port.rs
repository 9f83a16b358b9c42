//! Instrument catalog source port trait.

use crate::domain::error::PaperTraderError;
use crate::domain::instrument::Instrument;

/// A source of instruments for the startup catalog.
pub trait CatalogPort {
    fn load_instruments(&self) -> Result<Vec<Instrument>, PaperTraderError>;

    /// Human readable origin, used in log output.
    fn describe(&self) -> String;
}

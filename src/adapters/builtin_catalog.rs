//! Built-in market used when no catalog file is configured.

use crate::domain::catalog::Catalog;
use crate::domain::error::PaperTraderError;
use crate::domain::instrument::Instrument;
use crate::ports::catalog_port::CatalogPort;

pub struct BuiltinCatalog;

impl CatalogPort for BuiltinCatalog {
    fn load_instruments(&self) -> Result<Vec<Instrument>, PaperTraderError> {
        Ok(Catalog::builtin().list().to_vec())
    }

    fn describe(&self) -> String {
        "built-in market".to_string()
    }
}

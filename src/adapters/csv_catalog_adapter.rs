//! CSV file catalog adapter.
//!
//! Expects a header row followed by `ticker,name,price` records.

use crate::domain::error::PaperTraderError;
use crate::domain::instrument::Instrument;
use crate::ports::catalog_port::CatalogPort;
use std::fs;
use std::path::PathBuf;

pub struct CsvCatalogAdapter {
    path: PathBuf,
}

impl CsvCatalogAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn parse(content: &str) -> Result<Vec<Instrument>, PaperTraderError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());
        let mut instruments = Vec::new();

        for (index, result) in rdr.records().enumerate() {
            // header is line 1
            let line = index + 2;
            let record = result.map_err(|e| PaperTraderError::Catalog {
                reason: format!("CSV parse error: {}", e),
            })?;

            let ticker = record.get(0).ok_or_else(|| PaperTraderError::Catalog {
                reason: format!("line {line}: missing ticker column"),
            })?;
            let name = record.get(1).ok_or_else(|| PaperTraderError::Catalog {
                reason: format!("line {line}: missing name column"),
            })?;
            let price: f64 = record
                .get(2)
                .ok_or_else(|| PaperTraderError::Catalog {
                    reason: format!("line {line}: missing price column"),
                })?
                .parse()
                .map_err(|e| PaperTraderError::Catalog {
                    reason: format!("line {line}: invalid price value: {}", e),
                })?;

            instruments.push(Instrument::new(ticker, name, price));
        }

        Ok(instruments)
    }
}

impl CatalogPort for CsvCatalogAdapter {
    fn load_instruments(&self) -> Result<Vec<Instrument>, PaperTraderError> {
        let content = fs::read_to_string(&self.path).map_err(|e| PaperTraderError::Catalog {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;
        Self::parse(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MARKET_CSV: &str = "ticker,name,price\n\
        BHP,BHP Group,45.25\n\
        CBA,Commonwealth Bank,112.0\n\
        \"WES\",\"Wesfarmers, Ltd\",60.5\n";

    #[test]
    fn parse_reads_records_in_order() {
        let instruments = CsvCatalogAdapter::parse(MARKET_CSV).unwrap();
        assert_eq!(instruments.len(), 3);
        assert_eq!(instruments[0], Instrument::new("BHP", "BHP Group", 45.25));
        assert_eq!(instruments[1].ticker, "CBA");
        assert_eq!(instruments[2].name, "Wesfarmers, Ltd");
    }

    #[test]
    fn parse_trims_fields() {
        let instruments =
            CsvCatalogAdapter::parse("ticker,name,price\n  BHP , BHP Group , 45.0 \n").unwrap();
        assert_eq!(instruments[0], Instrument::new("BHP", "BHP Group", 45.0));
    }

    #[test]
    fn parse_header_only_is_empty() {
        let instruments = CsvCatalogAdapter::parse("ticker,name,price\n").unwrap();
        assert!(instruments.is_empty());
    }

    #[test]
    fn parse_invalid_price() {
        let result = CsvCatalogAdapter::parse("ticker,name,price\nBHP,BHP Group,lots\n");
        assert!(
            matches!(result, Err(PaperTraderError::Catalog { reason }) if reason.contains("line 2"))
        );
    }

    #[test]
    fn parse_missing_column() {
        let result = CsvCatalogAdapter::parse("ticker,name\nBHP,BHP Group\n");
        assert!(matches!(result, Err(PaperTraderError::Catalog { .. })));
    }

    #[test]
    fn load_instruments_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("market.csv");
        fs::write(&path, MARKET_CSV).unwrap();

        let adapter = CsvCatalogAdapter::new(path.clone());
        let instruments = adapter.load_instruments().unwrap();
        assert_eq!(instruments.len(), 3);
        assert_eq!(adapter.describe(), path.display().to_string());
    }

    #[test]
    fn load_instruments_missing_file() {
        let adapter = CsvCatalogAdapter::new(PathBuf::from("/nonexistent/market.csv"));
        assert!(matches!(
            adapter.load_instruments(),
            Err(PaperTraderError::Catalog { .. })
        ));
    }
}

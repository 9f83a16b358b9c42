//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::adapters::builtin_catalog::BuiltinCatalog;
use crate::adapters::csv_catalog_adapter::CsvCatalogAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::catalog::Catalog;
use crate::domain::error::PaperTraderError;
use crate::domain::market_config::MarketConfig;
use crate::domain::session::TradingSession;
use crate::ports::catalog_port::CatalogPort;
use crate::shell::Shell;

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Parser, Debug)]
#[command(name = "papertrader", about = "Paper stock trading simulator")]
pub struct Cli {
    /// INI file with [market], [prices] and [logging] sections
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the interactive trading menu (default)
    Trade,
    /// Print the market and exit
    Market,
    /// Check the configuration and catalog
    Validate,
}

pub fn run(cli: Cli) -> ExitCode {
    let command = cli.command.unwrap_or(Command::Trade);
    let config_path = cli.config.as_ref();

    if command == Command::Validate && config_path.is_none() {
        eprintln!("error: --config is required for validate");
        return ExitCode::from(1);
    }

    let market = match load_market_config(config_path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    init_logging(market.log_level.as_deref());

    let catalog = match build_catalog(&market) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match command {
        Command::Trade => run_trade(catalog),
        Command::Market => run_market(&catalog),
        Command::Validate => run_validate(&catalog),
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over the config level.
pub fn init_logging(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or(DEFAULT_LOG_LEVEL)));

    // a subscriber may already be installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Read the market configuration, or the defaults when no file is given.
///
/// A relative `[market] catalog` path resolves against the config file's
/// directory.
pub fn load_market_config(path: Option<&PathBuf>) -> Result<MarketConfig, PaperTraderError> {
    let Some(path) = path else {
        return Ok(MarketConfig::default());
    };

    let adapter =
        FileConfigAdapter::from_file(path).map_err(|e| PaperTraderError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;
    let mut market = MarketConfig::from_config(&adapter)?;

    if let Some(catalog_path) = market.catalog_path.take() {
        market.catalog_path = Some(resolve_relative(path, catalog_path));
    }
    Ok(market)
}

fn resolve_relative(config_path: &Path, target: PathBuf) -> PathBuf {
    if target.is_absolute() {
        return target;
    }
    match config_path.parent() {
        Some(dir) => dir.join(target),
        None => target,
    }
}

pub fn build_catalog(market: &MarketConfig) -> Result<Catalog, PaperTraderError> {
    match &market.catalog_path {
        Some(path) => load_catalog(&CsvCatalogAdapter::new(path.clone()), market),
        None => load_catalog(&BuiltinCatalog, market),
    }
}

pub fn load_catalog(
    port: &dyn CatalogPort,
    market: &MarketConfig,
) -> Result<Catalog, PaperTraderError> {
    let instruments = port.load_instruments()?;
    info!(
        source = %port.describe(),
        count = instruments.len(),
        "catalog loaded"
    );
    let catalog = market.apply(Catalog::new(instruments)?)?;
    debug!(count = catalog.len(), "catalog ready");
    Ok(catalog)
}

fn run_trade(catalog: Catalog) -> ExitCode {
    let mut session = TradingSession::new(catalog);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());

    match shell.run(&mut session) {
        Ok(()) => {
            info!(
                holdings = session.ledger().holding_count(),
                value = session.portfolio_value(),
                "session ended"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_market(catalog: &Catalog) -> ExitCode {
    println!("Available Stocks:");
    for instrument in catalog.list() {
        println!("{}", instrument);
    }
    ExitCode::SUCCESS
}

fn run_validate(catalog: &Catalog) -> ExitCode {
    if catalog.is_empty() {
        eprintln!("warning: catalog has no instruments");
    }
    eprintln!("Configuration is valid: {} instruments", catalog.len());
    ExitCode::SUCCESS
}

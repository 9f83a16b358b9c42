//! Interactive menu loop over line-based input and output.
//!
//! Generic over the reader and writer so the loop can be driven from
//! stdin/stdout or from in-memory buffers.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::domain::error::PaperTraderError;
use crate::domain::instrument::format_amount;
use crate::domain::session::TradingSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewMarket,
    Buy,
    Sell,
    ViewPortfolio,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::ViewMarket),
            2 => Some(MenuChoice::Buy),
            3 => Some(MenuChoice::Sell),
            4 => Some(MenuChoice::ViewPortfolio),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Buy,
    Sell,
}

pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Shell { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user exits or input ends.
    ///
    /// Malformed numeric input is fatal and returned as
    /// [`PaperTraderError::InvalidNumber`].
    pub fn run(&mut self, session: &mut TradingSession) -> Result<(), PaperTraderError> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                debug!("input closed at menu prompt");
                return Ok(());
            };
            let choice = parse_number(&line)?;

            match MenuChoice::from_number(choice) {
                Some(MenuChoice::ViewMarket) => self.view_market(session)?,
                Some(MenuChoice::Buy) => {
                    if !self.trade(session, Side::Buy)? {
                        return Ok(());
                    }
                }
                Some(MenuChoice::Sell) => {
                    if !self.trade(session, Side::Sell)? {
                        return Ok(());
                    }
                }
                Some(MenuChoice::ViewPortfolio) => self.view_portfolio(session)?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                None => {
                    debug!(choice, "invalid menu choice");
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<(), PaperTraderError> {
        writeln!(self.output)?;
        writeln!(self.output, "Welcome to the Stock Trading Platform!")?;
        writeln!(self.output, "1. View Market")?;
        writeln!(self.output, "2. Buy Stock")?;
        writeln!(self.output, "3. Sell Stock")?;
        writeln!(self.output, "4. View Portfolio")?;
        writeln!(self.output, "5. Exit")?;
        self.prompt("Choose an option: ")
    }

    fn view_market(&mut self, session: &TradingSession) -> Result<(), PaperTraderError> {
        writeln!(self.output, "Available Stocks:")?;
        for instrument in session.market().list() {
            writeln!(self.output, "{}", instrument)?;
        }
        Ok(())
    }

    fn view_portfolio(&mut self, session: &TradingSession) -> Result<(), PaperTraderError> {
        writeln!(self.output, "Your Portfolio:")?;
        for (instrument, quantity) in session.holdings() {
            writeln!(self.output, "{} | Quantity: {}", instrument, quantity)?;
        }
        writeln!(
            self.output,
            "Total Portfolio Value: ${}",
            format_amount(session.portfolio_value())
        )?;
        Ok(())
    }

    /// Returns false when input ended mid-flow.
    fn trade(
        &mut self,
        session: &mut TradingSession,
        side: Side,
    ) -> Result<bool, PaperTraderError> {
        let verb = match side {
            Side::Buy => "buy",
            Side::Sell => "sell",
        };
        self.prompt(&format!("Enter stock ticker to {verb}: "))?;
        let Some(ticker) = self.read_line()? else {
            return Ok(false);
        };

        if session.resolve(&ticker).is_err() {
            writeln!(self.output, "Stock not found.")?;
            return Ok(true);
        }

        self.prompt("Enter quantity: ")?;
        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        let quantity = parse_number(&line)?;

        let result = match side {
            Side::Buy => session.buy(&ticker, quantity),
            Side::Sell => session.sell(&ticker, quantity),
        };

        match result {
            Ok(fill) => {
                let past = match side {
                    Side::Buy => "Bought",
                    Side::Sell => "Sold",
                };
                writeln!(
                    self.output,
                    "{} {} shares of {}",
                    past, fill.quantity, fill.ticker
                )?;
            }
            Err(PaperTraderError::InsufficientShares { .. }) => {
                writeln!(self.output, "Not enough shares to sell.")?;
            }
            Err(PaperTraderError::StockNotFound { .. }) => {
                writeln!(self.output, "Stock not found.")?;
            }
            Err(PaperTraderError::QuantityOverflow { .. }) => {
                writeln!(self.output, "Quantity out of range.")?;
            }
            Err(e) => return Err(e),
        }
        Ok(true)
    }

    fn prompt(&mut self, text: &str) -> Result<(), PaperTraderError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, PaperTraderError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Parse a whole-number answer. Anything else is malformed input.
pub fn parse_number(input: &str) -> Result<i64, PaperTraderError> {
    input.trim().parse::<i64>().map_err(|_| {
        warn!(input, "malformed numeric input");
        PaperTraderError::InvalidNumber {
            input: input.trim().to_string(),
        }
    })
}

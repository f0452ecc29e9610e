//! Ticker Lister: lists and saves equity ticker symbols, optionally filtered by
//! exchange, region, market cap, or sector.
//!
//! Usage example (CLI):
//! ```bash
//! ticker_lister list --no-amex
//! ticker_lister --head 5 region asia
//! ticker_lister filtered --min 500 --max 2000
//! ticker_lister biggest 5 --sector technology
//! ticker_lister save-region europe --file EU_tickers.csv
//! ```
//!
//! Without `--fixture` the tickers come from the public NASDAQ screener; with it,
//! from a JSON array of ticker records (see `ticker_common::TickerRecord`).
#![warn(missing_docs)]
mod args;

use crate::args::{Args, Command};
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::time::Duration;
use ticker_common::{
    NasdaqProvider, Result, Sector, StaticProvider, TickerError, TickerFilter, TickerProvider,
    TickerQuery,
};

fn main() -> Result<(), TickerError> {
    init_logger();
    let args = Args::parse();

    let provider = build_provider(&args)?;
    let query = TickerQuery::new(provider);

    if let Err(e) = run(&query, args.command, args.head) {
        error!("{}", e);
        return Err(e);
    }
    Ok(())
}

fn build_provider(args: &Args) -> Result<Box<dyn TickerProvider>> {
    match &args.fixture {
        Some(raw) => {
            let path = normalize_path(raw);
            info!("Using ticker fixture {}", path.display());
            Ok(Box::new(StaticProvider::from_json_file(path)?))
        }
        None => Ok(Box::new(NasdaqProvider::new(Duration::from_secs(
            args.timeout_secs,
        ))?)),
    }
}

fn run<P: TickerProvider>(query: &TickerQuery<P>, command: Command, head: Option<usize>) -> Result<()> {
    match command {
        Command::List { exchanges } => print_tickers(&query.list_tickers(exchanges.into())?, head),
        Command::Region { region } => print_tickers(&query.list_tickers_by_region(&region)?, head),
        Command::Filtered { min, max, sectors } => {
            let filter = TickerFilter {
                mktcap_min: min,
                mktcap_max: max,
                sectors: parse_sectors(&sectors)?,
            };
            print_tickers(&query.list_tickers_filtered(&filter)?, head)
        }
        Command::Biggest { n, sectors } => {
            let sectors = parse_sectors(&sectors)?;
            print_tickers(&query.list_biggest_n_tickers(n, sectors.as_deref())?, head)
        }
        Command::Save { file, exchanges } => {
            query.save_tickers(normalize_path(&file), exchanges.into())
        }
        Command::SaveRegion { region, file } => {
            query.save_tickers_by_region(&region, normalize_path(&file))
        }
    }
}

/// `None` when no sector was given, so every sector is kept.
fn parse_sectors(raw: &[String]) -> Result<Option<Vec<Sector>>> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.iter()
        .map(|s| s.parse::<Sector>())
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

fn print_tickers(tickers: &[String], head: Option<usize>) -> Result<()> {
    let shown = head.unwrap_or(tickers.len()).min(tickers.len());
    for ticker in &tickers[..shown] {
        println!("{}", ticker);
    }
    if shown < tickers.len() {
        info!("Showing {} of {} tickers", shown, tickers.len());
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

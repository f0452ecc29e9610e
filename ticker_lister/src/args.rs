//! Command-line arguments for the ticker lister.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Args as ClapArgs, Parser, Subcommand};
use ticker_common::ExchangeSelector;
use ticker_common::net::{DEFAULT_TICKERS_FILE, DEFAULT_TIMEOUT_SECS};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON file with an array of ticker records to use instead of the NASDAQ screener.
    #[clap(long)]
    pub fixture: Option<String>,

    /// Request timeout in seconds for the NASDAQ screener.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Print only the first N symbols of a listing.
    #[clap(long)]
    pub head: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

/// Exchange exclusion flags shared by `list` and `save`.
#[derive(Debug, Clone, Copy, ClapArgs)]
pub struct ExchangeFlags {
    /// Leave out NYSE listings.
    #[clap(long)]
    pub no_nyse: bool,
    /// Leave out NASDAQ listings.
    #[clap(long)]
    pub no_nasdaq: bool,
    /// Leave out AMEX listings.
    #[clap(long)]
    pub no_amex: bool,
}

impl From<ExchangeFlags> for ExchangeSelector {
    fn from(flags: ExchangeFlags) -> Self {
        ExchangeSelector::new(!flags.no_nyse, !flags.no_nasdaq, !flags.no_amex)
    }
}

/// What to do.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List tickers of the selected exchanges.
    List {
        #[command(flatten)]
        exchanges: ExchangeFlags,
    },
    /// List tickers of one region (e.g. ASIA, EUROPE, MIDDLE_EAST).
    Region {
        /// Region tag.
        region: String,
    },
    /// List tickers by market cap range (millions) and sector.
    Filtered {
        /// Lowest market cap, in millions.
        #[clap(long)]
        min: Option<f64>,
        /// Highest market cap, in millions.
        #[clap(long)]
        max: Option<f64>,
        /// Sector to keep; repeat for several.
        #[clap(long = "sector")]
        sectors: Vec<String>,
    },
    /// List the N biggest tickers by market cap.
    Biggest {
        /// How many tickers.
        n: usize,
        /// Sector to keep; repeat for several.
        #[clap(long = "sector")]
        sectors: Vec<String>,
    },
    /// Save tickers of the selected exchanges to a CSV file.
    Save {
        /// Destination file.
        #[clap(long, default_value = DEFAULT_TICKERS_FILE)]
        file: String,
        #[command(flatten)]
        exchanges: ExchangeFlags,
    },
    /// Save tickers of one region to a CSV file.
    SaveRegion {
        /// Region tag.
        region: String,
        /// Destination file.
        #[clap(long, default_value = DEFAULT_TICKERS_FILE)]
        file: String,
    },
}

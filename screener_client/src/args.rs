//! Command-line arguments for the Screener Client.
use clap::Parser;
use ticker_common::net::{DEFAULT_TIMEOUT_SECS, NASDAQ_SCREENER_URL};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Screener endpoint.
    #[clap(long, default_value = NASDAQ_SCREENER_URL)]
    pub url: String,

    /// Exchange to screen (adds `letter=0&exchange=<NAME>&download=true`).
    #[clap(long)]
    pub exchange: Option<String>,

    /// Extra query parameter as KEY=VALUE; repeatable.
    #[clap(long = "param", value_parser = parse_pair)]
    pub params: Vec<(String, String)>,

    /// Extra request header as NAME=VALUE; repeatable.
    #[clap(long = "header", value_parser = parse_pair)]
    pub headers: Vec<(String, String)>,

    /// Do not send the browser-like default headers.
    #[clap(long)]
    pub no_default_headers: bool,

    /// Request timeout in seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

/// Split `KEY=VALUE` at the first `=`.
pub fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got {raw:?}")),
    }
}

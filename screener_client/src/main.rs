//! Screener Client: fetches one table from a JSON stock-screener endpoint and
//! prints it to stdout, tab-separated, header line first.
//!
//! Usage example (CLI):
//! ```bash
//! screener_client --exchange nasdaq
//! screener_client --url https://example.com/screener --param limit=25 --header x-token=abc
//! ```
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use log::{error, info};
use std::time::Duration;
use ticker_common::net::browser_headers;
use ticker_common::{Result, ScreenerClient, TickerError};

fn main() -> Result<(), TickerError> {
    init_logger();
    let args = Args::parse();

    let headers = request_headers(&args);
    let params = query_params(&args);

    let client = ScreenerClient::new(Duration::from_secs(args.timeout_secs))?;
    info!("Fetching screener table from {}", args.url);
    match client.fetch_table(&args.url, &headers, &params) {
        Ok(table) => {
            print!("{}", table);
            info!("{} rows", table.len());
            Ok(())
        }
        Err(e) => {
            error!("Screener fetch failed: {}", e);
            Err(e)
        }
    }
}

/// Default browser headers (unless disabled), then user headers, later ones winning.
fn request_headers(args: &Args) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = if args.no_default_headers {
        Vec::new()
    } else {
        browser_headers()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    };
    headers.extend(args.headers.iter().cloned());
    headers
}

fn query_params(args: &Args) -> Vec<(String, String)> {
    let mut params = Vec::new();
    if let Some(exchange) = &args.exchange {
        params.push(("letter".to_string(), "0".to_string()));
        params.push(("exchange".to_string(), exchange.to_lowercase()));
        params.push(("download".to_string(), "true".to_string()));
    }
    params.extend(args.params.iter().cloned());
    params
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

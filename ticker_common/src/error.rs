//! Error type shared by the library and both binaries.
//!
//! `TickerError` separates caller mistakes (`InvalidRegion`, `InvalidArgument`)
//! from collaborator failures (`Provider`, `Network`, `MalformedResponse`) and
//! local file failures (`Io`). Nothing is retried; every error surfaces to the
//! caller of the operation that produced it.
use std::io;

use thiserror::Error;

/// Unified error type for ticker queries, exports, and screener fetches.
#[derive(Error, Debug)]
pub enum TickerError {
    /// The upstream ticker source failed or returned unusable data.
    #[error("Provider error: {0}")]
    Provider(String),

    /// A region tag outside the closed set of regions.
    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    /// Out-of-domain argument (zero `n`, inverted market-cap bounds, unknown sector, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport-level failure reaching the screener endpoint (DNS, connect, timeout, HTTP status).
    #[error("Network error: {0}")]
    Network(String),

    /// The screener body is not JSON or does not carry the expected `data.headers`/`data.rows` shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// I/O error while writing or reading a ticker file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<reqwest::Error> for TickerError {
    fn from(err: reqwest::Error) -> Self {
        TickerError::Network(err.to_string())
    }
}

impl From<tempfile::PersistError> for TickerError {
    fn from(err: tempfile::PersistError) -> Self {
        TickerError::Io(err.error)
    }
}

//!
//! Ticker listing, filtering, export, and screener table retrieval.
//!
//! This crate aggregates:
//! - `error`: unified error type `TickerError` used across the workspace.
//! - `result`: handy `Result<T, TickerError>` alias.
//! - `net`: endpoint constants, timeouts, and default request headers.
//! - `exchange`, `region`, `sector`: closed tag sets used as query keys.
//! - `record`: `TickerRecord` as supplied by a provider.
//! - `provider`: the `TickerProvider` capability and the in-memory `StaticProvider`.
//! - `nasdaq`: network-backed provider on top of the NASDAQ stock screener.
//! - `query`: `TickerQuery`, the listing/filtering/export operations.
//! - `export`: single-column CSV persistence of ticker lists.
//! - `screener`: one-shot JSON screener fetch reshaped into a `Table`.
#![warn(missing_docs)]
pub mod error;
pub mod exchange;
pub mod export;
pub mod nasdaq;
pub mod net;
pub mod provider;
pub mod query;
pub mod record;
pub mod region;
pub mod result;
pub mod screener;
pub mod sector;

pub use error::TickerError;
pub use exchange::{Exchange, ExchangeSelector};
pub use nasdaq::NasdaqProvider;
pub use provider::{StaticProvider, TickerProvider};
pub use query::{TickerFilter, TickerQuery};
pub use record::TickerRecord;
pub use region::{IntoRegion, Region};
pub use result::Result;
pub use screener::{ScreenerClient, Table, fetch_screener_table};
pub use sector::Sector;

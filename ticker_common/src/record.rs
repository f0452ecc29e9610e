//! Ticker record as supplied by a provider.

use serde::{Deserialize, Serialize};

use crate::exchange::Exchange;
use crate::region::Region;
use crate::sector::Sector;

/// A ticker symbol plus whatever descriptive attributes the provider knows.
///
/// Identity is the symbol. Market capitalization is expressed in millions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerRecord {
    /// Ticker symbol (e.g., `AAPL`).
    pub symbol: String,
    /// Company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Listing exchange.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<Exchange>,
    /// Sector tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<Sector>,
    /// Market capitalization in millions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    /// Region of the exchange's home area.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    /// Country of incorporation, as free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl TickerRecord {
    /// Record with only a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: None,
            exchange: None,
            sector: None,
            market_cap: None,
            region: None,
            country: None,
        }
    }

    /// Set the exchange.
    pub fn with_exchange(mut self, exchange: Exchange) -> Self {
        self.exchange = Some(exchange);
        self
    }

    /// Set the sector.
    pub fn with_sector(mut self, sector: Sector) -> Self {
        self.sector = Some(sector);
        self
    }

    /// Set the market cap, in millions.
    pub fn with_market_cap(mut self, millions: f64) -> Self {
        self.market_cap = Some(millions);
        self
    }

    /// Set the region.
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }
}

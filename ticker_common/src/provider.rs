//! Ticker source capability.
//!
//! `TickerQuery` only needs two primitive lookups from a source: every record
//! listed on one exchange, and every record for one region. Filtering, ranking,
//! and export are computed on top of these, so a network-backed source and an
//! in-memory one behave identically from the caller's point of view.
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use crate::error::TickerError;
use crate::exchange::Exchange;
use crate::record::TickerRecord;
use crate::region::Region;
use crate::result::Result;

/// Source of ticker records.
///
/// Failures of the source itself are reported as `TickerError::Provider`.
pub trait TickerProvider {
    /// All records listed on `exchange`, in source order.
    fn exchange_records(&self, exchange: Exchange) -> Result<Vec<TickerRecord>>;

    /// All records belonging to `region`, in source order.
    fn region_records(&self, region: Region) -> Result<Vec<TickerRecord>>;
}

impl<P: TickerProvider + ?Sized> TickerProvider for &P {
    fn exchange_records(&self, exchange: Exchange) -> Result<Vec<TickerRecord>> {
        (**self).exchange_records(exchange)
    }

    fn region_records(&self, region: Region) -> Result<Vec<TickerRecord>> {
        (**self).region_records(region)
    }
}

impl<P: TickerProvider + ?Sized> TickerProvider for Box<P> {
    fn exchange_records(&self, exchange: Exchange) -> Result<Vec<TickerRecord>> {
        (**self).exchange_records(exchange)
    }

    fn region_records(&self, region: Region) -> Result<Vec<TickerRecord>> {
        (**self).region_records(region)
    }
}

/// In-memory provider backed by a fixed list of records.
///
/// A record is served for an exchange (or region) only if it carries that tag.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    records: Vec<TickerRecord>,
}

impl StaticProvider {
    /// Create a provider over `records`.
    pub fn new(records: Vec<TickerRecord>) -> Self {
        Self { records }
    }

    /// Load records from a JSON array of `TickerRecord`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<TickerRecord> = serde_json::from_reader(reader)
            .map_err(|e| TickerError::Provider(format!("invalid ticker fixture: {e}")))?;
        Ok(Self::new(records))
    }

    /// Load records from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let provider = Self::from_reader(BufReader::new(file))?;
        debug!(
            "Loaded {} ticker records from {}",
            provider.records.len(),
            path.display()
        );
        Ok(provider)
    }

    /// All records held by this provider.
    pub fn records(&self) -> &[TickerRecord] {
        &self.records
    }
}

impl TickerProvider for StaticProvider {
    fn exchange_records(&self, exchange: Exchange) -> Result<Vec<TickerRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.exchange == Some(exchange))
            .cloned()
            .collect())
    }

    fn region_records(&self, region: Region) -> Result<Vec<TickerRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.region == Some(region))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_records_by_tag() {
        let provider = StaticProvider::new(vec![
            TickerRecord::new("AAPL").with_exchange(Exchange::Nasdaq),
            TickerRecord::new("IBM").with_exchange(Exchange::Nyse),
            TickerRecord::new("SAP").with_region(Region::Europe),
        ]);

        let nasdaq = provider.exchange_records(Exchange::Nasdaq).unwrap();
        assert_eq!(nasdaq.len(), 1);
        assert_eq!(nasdaq[0].symbol, "AAPL");
        assert!(provider.exchange_records(Exchange::Amex).unwrap().is_empty());

        let europe = provider.region_records(Region::Europe).unwrap();
        assert_eq!(europe[0].symbol, "SAP");
    }

    #[test]
    fn loads_json_fixture() {
        let json = r#"[
            {"symbol": "AAPL", "exchange": "NASDAQ", "sector": "Technology", "market_cap": 2800000.0},
            {"symbol": "XOM", "exchange": "NYSE", "sector": "Energy"}
        ]"#;
        let provider = StaticProvider::from_reader(json.as_bytes()).unwrap();
        assert_eq!(provider.records().len(), 2);
        assert_eq!(provider.records()[0].market_cap, Some(2_800_000.0));
        assert_eq!(provider.records()[1].exchange, Some(Exchange::Nyse));
    }

    #[test]
    fn bad_fixture_is_a_provider_error() {
        let err = StaticProvider::from_reader("{not json".as_bytes()).unwrap_err();
        assert!(matches!(err, TickerError::Provider(_)));
    }
}

//! Ticker listing, filtering, and export over any `TickerProvider`.
//!
//! Every operation performs the provider lookups it needs, synchronously, and
//! returns symbols deduplicated by first occurrence. Nothing is cached between
//! calls.
use std::collections::HashSet;
use std::path::Path;

use log::info;

use crate::error::TickerError;
use crate::exchange::{Exchange, ExchangeSelector};
use crate::export::write_tickers_csv;
use crate::provider::TickerProvider;
use crate::record::TickerRecord;
use crate::region::IntoRegion;
use crate::result::Result;
use crate::sector::Sector;

/// Market-cap and sector restrictions for `list_tickers_filtered`.
///
/// Bounds are in millions and inclusive; an absent bound is unbounded on that side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickerFilter {
    /// Lowest market cap kept.
    pub mktcap_min: Option<f64>,
    /// Highest market cap kept.
    pub mktcap_max: Option<f64>,
    /// Sectors kept; `None` keeps every sector.
    pub sectors: Option<Vec<Sector>>,
}

impl TickerFilter {
    /// Filter that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lower market-cap bound.
    pub fn min(mut self, millions: f64) -> Self {
        self.mktcap_min = Some(millions);
        self
    }

    /// Set the upper market-cap bound.
    pub fn max(mut self, millions: f64) -> Self {
        self.mktcap_max = Some(millions);
        self
    }

    /// Restrict to `sectors`.
    pub fn sectors(mut self, sectors: impl IntoIterator<Item = Sector>) -> Self {
        self.sectors = Some(sectors.into_iter().collect());
        self
    }

    /// Reject NaN/negative bounds, `min > max`, and an empty sector list.
    pub fn validate(&self) -> Result<()> {
        for (label, bound) in [("mktcap_min", self.mktcap_min), ("mktcap_max", self.mktcap_max)] {
            if let Some(v) = bound {
                if v.is_nan() || v < 0.0 {
                    return Err(TickerError::InvalidArgument(format!(
                        "{label} must be a non-negative number, got {v}"
                    )));
                }
            }
        }
        if let (Some(min), Some(max)) = (self.mktcap_min, self.mktcap_max) {
            if min > max {
                return Err(TickerError::InvalidArgument(format!(
                    "mktcap_min ({min}) is greater than mktcap_max ({max})"
                )));
            }
        }
        validate_sectors(self.sectors.as_deref())
    }

    fn has_cap_bound(&self) -> bool {
        self.mktcap_min.is_some() || self.mktcap_max.is_some()
    }

    /// Whether `record` passes both the market-cap and sector restrictions.
    pub fn matches(&self, record: &TickerRecord) -> bool {
        if !sector_matches(self.sectors.as_deref(), record) {
            return false;
        }
        if !self.has_cap_bound() {
            return true;
        }
        match finite_cap(record) {
            Some(cap) => {
                self.mktcap_min.is_none_or(|min| cap >= min)
                    && self.mktcap_max.is_none_or(|max| cap <= max)
            }
            None => false,
        }
    }
}

fn validate_sectors(sectors: Option<&[Sector]>) -> Result<()> {
    match sectors {
        Some([]) => Err(TickerError::InvalidArgument(
            "sector list is empty; pass no sectors to keep all".to_string(),
        )),
        _ => Ok(()),
    }
}

fn sector_matches(sectors: Option<&[Sector]>, record: &TickerRecord) -> bool {
    match sectors {
        None => true,
        Some(wanted) => record.sector.is_some_and(|s| wanted.contains(&s)),
    }
}

fn finite_cap(record: &TickerRecord) -> Option<f64> {
    record.market_cap.filter(|c| c.is_finite())
}

fn dedup_records(records: Vec<TickerRecord>) -> Vec<TickerRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.symbol.clone()))
        .collect()
}

fn symbols(records: Vec<TickerRecord>) -> Vec<String> {
    dedup_records(records).into_iter().map(|r| r.symbol).collect()
}

/// Ticker operations over a provider.
#[derive(Debug, Clone)]
pub struct TickerQuery<P> {
    provider: P,
}

impl<P: TickerProvider> TickerQuery<P> {
    /// Wrap `provider`.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The wrapped provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn exchange_records(&self, selector: ExchangeSelector) -> Result<Vec<TickerRecord>> {
        let mut records = Vec::new();
        for exchange in selector.enabled() {
            records.extend(self.provider.exchange_records(exchange)?);
        }
        Ok(records)
    }

    /// Symbols listed on the enabled exchanges, in provider order.
    pub fn list_tickers(&self, selector: ExchangeSelector) -> Result<Vec<String>> {
        let tickers = symbols(self.exchange_records(selector)?);
        info!("Listed {} tickers from {:?}", tickers.len(), selector.enabled());
        Ok(tickers)
    }

    /// Symbols for one region. Unknown region text fails with `InvalidRegion`.
    pub fn list_tickers_by_region(&self, region: impl IntoRegion) -> Result<Vec<String>> {
        let region = region.into_region()?;
        let tickers = symbols(self.provider.region_records(region)?);
        info!("Listed {} tickers for region {}", tickers.len(), region);
        Ok(tickers)
    }

    /// Symbols from all exchanges whose market cap (millions) and sector pass `filter`.
    ///
    /// With any bound set, records without a market cap are dropped.
    pub fn list_tickers_filtered(&self, filter: &TickerFilter) -> Result<Vec<String>> {
        filter.validate()?;
        let records = self
            .exchange_records(ExchangeSelector::all())?
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect();
        let tickers = symbols(records);
        info!("{} tickers passed {:?}", tickers.len(), filter);
        Ok(tickers)
    }

    /// The `n` largest tickers by market cap, descending, optionally within `sectors`.
    ///
    /// Returns fewer than `n` if fewer match. `n == 0` fails with `InvalidArgument`.
    pub fn list_biggest_n_tickers(
        &self,
        n: usize,
        sectors: Option<&[Sector]>,
    ) -> Result<Vec<String>> {
        if n == 0 {
            return Err(TickerError::InvalidArgument(
                "n must be a positive integer".to_string(),
            ));
        }
        validate_sectors(sectors)?;

        let mut ranked: Vec<(f64, TickerRecord)> = dedup_records(
            self.exchange_records(ExchangeSelector::all())?
                .into_iter()
                .filter(|r| sector_matches(sectors, r) && finite_cap(r).is_some())
                .collect(),
        )
        .into_iter()
        .filter_map(|r| finite_cap(&r).map(|cap| (cap, r)))
        .collect();
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

        let tickers: Vec<String> = ranked.into_iter().take(n).map(|(_, r)| r.symbol).collect();
        info!("Top {} tickers by market cap: {:?}", n, tickers);
        Ok(tickers)
    }

    /// Write `list_tickers(selector)` to `path`, one symbol per line.
    pub fn save_tickers(&self, path: impl AsRef<Path>, selector: ExchangeSelector) -> Result<()> {
        let tickers = self.list_tickers(selector)?;
        write_tickers_csv(path, &tickers)
    }

    /// Write `list_tickers_by_region(region)` to `path`, one symbol per line.
    pub fn save_tickers_by_region(
        &self,
        region: impl IntoRegion,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let tickers = self.list_tickers_by_region(region)?;
        write_tickers_csv(path, &tickers)
    }

    /// Whether `symbol` is listed on `exchange`.
    pub fn is_listed_on(&self, symbol: &str, exchange: Exchange) -> Result<bool> {
        Ok(self
            .provider
            .exchange_records(exchange)?
            .iter()
            .any(|r| r.symbol == symbol))
    }
}

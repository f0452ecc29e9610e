//! Network-backed `TickerProvider` on top of the NASDAQ stock screener.
//!
//! Each lookup is one screener fetch (`letter=0&download=true` plus either
//! `exchange=<name>` or `region=<name>`). The returned table is converted into
//! `TickerRecord`s using the `symbol`, `name`, `marketCap`, `sector` and
//! `country` columns. Symbols of preferreds, warrants and units (anything
//! containing `^`, `/` or `.`) are dropped.
use std::time::Duration;

use log::{debug, info, warn};
use serde_json::Value;

use crate::error::TickerError;
use crate::exchange::Exchange;
use crate::net::{NASDAQ_SCREENER_URL, browser_headers, default_timeout};
use crate::provider::TickerProvider;
use crate::record::TickerRecord;
use crate::region::Region;
use crate::result::Result;
use crate::screener::{ScreenerClient, Table, cell_text};
use crate::sector::Sector;

const SYMBOL: &str = "symbol";
const NAME: &str = "name";
const MARKET_CAP: &str = "marketCap";
const SECTOR: &str = "sector";
const COUNTRY: &str = "country";

/// Ticker provider that queries the public NASDAQ screener.
#[derive(Debug, Clone)]
pub struct NasdaqProvider {
    client: ScreenerClient,
    endpoint: String,
    headers: Vec<(String, String)>,
}

impl NasdaqProvider {
    /// Provider against the public endpoint with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: ScreenerClient::new(timeout)?,
            endpoint: NASDAQ_SCREENER_URL.to_string(),
            headers: browser_headers()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        })
    }

    /// Provider with the default timeout.
    pub fn with_default_timeout() -> Result<Self> {
        Self::new(default_timeout())
    }

    /// Point the provider at another screener endpoint (mirrors, test servers).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn fetch(&self, filter: (&str, &str)) -> Result<Table> {
        let params = [("letter", "0"), filter, ("download", "true")];
        self.client
            .fetch_table(&self.endpoint, &self.headers, &params)
            .map_err(|e| TickerError::Provider(format!("{}={} lookup failed: {e}", filter.0, filter.1)))
    }
}

impl TickerProvider for NasdaqProvider {
    fn exchange_records(&self, exchange: Exchange) -> Result<Vec<TickerRecord>> {
        let table = self.fetch(("exchange", exchange.query_value()))?;
        let records = records_from_table(&table)?
            .into_iter()
            .map(|r| r.with_exchange(exchange))
            .collect::<Vec<_>>();
        info!("{} listed {} tickers", exchange, records.len());
        Ok(records)
    }

    fn region_records(&self, region: Region) -> Result<Vec<TickerRecord>> {
        let table = self.fetch(("region", region.query_value()))?;
        let records = records_from_table(&table)?
            .into_iter()
            .map(|r| r.with_region(region))
            .collect::<Vec<_>>();
        info!("{} listed {} tickers", region, records.len());
        Ok(records)
    }
}

/// Convert a screener table into ticker records.
///
/// Fails with `Provider` if there is no `symbol` column.
pub fn records_from_table(table: &Table) -> Result<Vec<TickerRecord>> {
    let symbol_idx = table
        .column_index(SYMBOL)
        .ok_or_else(|| TickerError::Provider("screener table has no `symbol` column".to_string()))?;
    let name_idx = table.column_index(NAME);
    let cap_idx = table.column_index(MARKET_CAP);
    let sector_idx = table.column_index(SECTOR);
    let country_idx = table.column_index(COUNTRY);

    let text_at = |row: &[Value], idx: Option<usize>| -> Option<String> {
        idx.map(|i| cell_text(&row[i]).trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let mut records = Vec::with_capacity(table.len());
    for row in table.rows() {
        let row = row.as_slice();
        let symbol = cell_text(&row[symbol_idx]).trim().to_string();
        if !is_common_symbol(&symbol) {
            debug!("Skipping symbol {:?}", symbol);
            continue;
        }

        let market_cap = match text_at(row, cap_idx) {
            Some(raw) => {
                let parsed = parse_market_cap(&raw);
                if parsed.is_none() {
                    warn!("Unreadable market cap {:?} for {}", raw, symbol);
                }
                parsed
            }
            None => None,
        };

        records.push(TickerRecord {
            symbol,
            name: text_at(row, name_idx),
            exchange: None,
            sector: text_at(row, sector_idx).and_then(|s| Sector::from_label(&s)),
            market_cap,
            region: None,
            country: text_at(row, country_idx),
        });
    }
    Ok(records)
}

fn is_common_symbol(symbol: &str) -> bool {
    !symbol.is_empty() && !symbol.contains(['^', '/', '.'])
}

/// Parse screener market-cap text into millions.
///
/// Accepts plain dollar amounts (`1,234,567.00`) and abbreviated forms
/// (`$1.2B`, `$350.5M`, `$2.1T`, `$900K`). Blank and `NA` give `None`.
pub fn parse_market_cap(raw: &str) -> Option<f64> {
    let text: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if text.is_empty() || text.eq_ignore_ascii_case("na") || text.eq_ignore_ascii_case("n/a") {
        return None;
    }

    let (number, scale) = match text.chars().last()? {
        'T' | 't' => (&text[..text.len() - 1], 1_000_000.0),
        'B' | 'b' => (&text[..text.len() - 1], 1_000.0),
        'M' | 'm' => (&text[..text.len() - 1], 1.0),
        'K' | 'k' => (&text[..text.len() - 1], 0.001),
        _ => (text.as_str(), 1e-6),
    };

    number
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v * scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn close(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() <= 1e-9 * b.abs().max(1.0))
    }

    #[test]
    fn market_cap_forms() {
        assert!(close(parse_market_cap("2,345,000,000.00"), 2345.0));
        assert!(close(parse_market_cap("$1.5B"), 1500.0));
        assert!(close(parse_market_cap("$350.5M"), 350.5));
        assert!(close(parse_market_cap("$2T"), 2_000_000.0));
        assert!(close(parse_market_cap("$900K"), 0.9));
        assert_eq!(parse_market_cap(""), None);
        assert_eq!(parse_market_cap("NA"), None);
        assert_eq!(parse_market_cap("lots"), None);
        assert_eq!(parse_market_cap("-5"), None);
    }

    #[test]
    fn converts_rows_and_drops_odd_symbols() {
        let table = Table::new(
            vec![
                "symbol".into(),
                "name".into(),
                "marketCap".into(),
                "sector".into(),
                "country".into(),
            ],
            vec![
                vec![json!("AAPL "), json!("Apple Inc."), json!("2,800,000,000,000"), json!("Technology"), json!("United States")],
                vec![json!("BRK.A"), json!("Berkshire"), json!("1"), json!("Finance"), json!("United States")],
                vec![json!("ABR^D"), json!("Arbor pref"), json!(""), json!(""), json!("")],
                vec![json!("ZZZ"), json!(""), json!(""), json!("Space"), json!("")],
            ],
        )
        .unwrap();

        let records = records_from_table(&table).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].symbol, "AAPL");
        assert_eq!(records[0].name.as_deref(), Some("Apple Inc."));
        assert!(close(records[0].market_cap, 2_800_000.0));
        assert_eq!(records[0].sector, Some(Sector::Technology));
        assert_eq!(records[0].country.as_deref(), Some("United States"));

        assert_eq!(records[1].symbol, "ZZZ");
        assert_eq!(records[1].name, None);
        assert_eq!(records[1].market_cap, None);
        assert_eq!(records[1].sector, None);
    }

    #[test]
    fn table_without_symbol_column() {
        let table = Table::new(vec!["ticker".into()], vec![vec![json!("AAPL")]]).unwrap();
        assert!(matches!(
            records_from_table(&table),
            Err(TickerError::Provider(_))
        ));
    }
}

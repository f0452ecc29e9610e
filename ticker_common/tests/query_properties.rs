use std::fs::{self, File};
use std::io::BufReader;

use tempfile::tempdir;
use ticker_common::export::read_tickers_csv;
use ticker_common::{
    Exchange, ExchangeSelector, Region, Sector, StaticProvider, TickerError, TickerFilter,
    TickerQuery, TickerRecord,
};

fn universe() -> StaticProvider {
    let caps = [
        ("NY1", Exchange::Nyse, Sector::Finance, 499.9),
        ("NY2", Exchange::Nyse, Sector::Energy, 500.0),
        ("NY3", Exchange::Nyse, Sector::Technology, 1200.0),
        ("NQ1", Exchange::Nasdaq, Sector::Technology, 2000.0),
        ("NQ2", Exchange::Nasdaq, Sector::HealthCare, 2000.1),
        ("NQ3", Exchange::Nasdaq, Sector::Technology, 150_000.0),
        ("AM1", Exchange::Amex, Sector::Energy, 75.0),
        ("AM2", Exchange::Amex, Sector::Utilities, 9_000.0),
    ];
    let mut records: Vec<TickerRecord> = caps
        .into_iter()
        .map(|(symbol, exchange, sector, cap)| {
            TickerRecord::new(symbol)
                .with_exchange(exchange)
                .with_sector(sector)
                .with_market_cap(cap)
        })
        .collect();
    records.push(TickerRecord::new("ASX1").with_region(Region::AustraliaSouthPacific));
    records.push(TickerRecord::new("LSE1").with_region(Region::Europe));
    records.push(TickerRecord::new("LSE2").with_region(Region::Europe));
    StaticProvider::new(records)
}

#[test]
fn listed_symbols_belong_to_enabled_exchanges() {
    let query = TickerQuery::new(universe());
    for nyse in [false, true] {
        for nasdaq in [false, true] {
            for amex in [false, true] {
                let selector = ExchangeSelector::new(nyse, nasdaq, amex);
                let tickers = query.list_tickers(selector).unwrap();
                for symbol in &tickers {
                    let attributable = selector
                        .enabled()
                        .into_iter()
                        .any(|e| query.is_listed_on(symbol, e).unwrap());
                    assert!(attributable, "{symbol} not on {selector:?}");
                }
                let expected: usize = selector.enabled().len() * 3 - usize::from(amex);
                assert_eq!(tickers.len(), expected);
            }
        }
    }
}

#[test]
fn closed_interval_includes_boundaries() {
    let query = TickerQuery::new(universe());
    let tickers = query
        .list_tickers_filtered(&TickerFilter::new().min(500.0).max(2000.0))
        .unwrap();
    assert_eq!(tickers, ["NY2", "NY3", "NQ1"]);
}

#[test]
fn min_only_is_unbounded_above() {
    let query = TickerQuery::new(universe());
    let tickers = query
        .list_tickers_filtered(&TickerFilter::new().min(2000.0))
        .unwrap();
    assert_eq!(tickers, ["NQ1", "NQ2", "NQ3", "AM2"]);
}

#[test]
fn max_only_with_sectors() {
    let query = TickerQuery::new(universe());
    let tickers = query
        .list_tickers_filtered(
            &TickerFilter::new()
                .max(1000.0)
                .sectors([Sector::Energy, Sector::Finance]),
        )
        .unwrap();
    assert_eq!(tickers, ["NY1", "NY2", "AM1"]);
}

#[test]
fn biggest_n_is_sorted_and_truncated() {
    let query = TickerQuery::new(universe());

    let top3 = query.list_biggest_n_tickers(3, None).unwrap();
    assert_eq!(top3, ["NQ3", "AM2", "NQ2"]);

    let all = query.list_biggest_n_tickers(100, None).unwrap();
    assert_eq!(all.len(), 8);
    let caps: Vec<f64> = all
        .iter()
        .map(|s| {
            query
                .provider()
                .records()
                .iter()
                .find(|r| &r.symbol == s)
                .and_then(|r| r.market_cap)
                .unwrap()
        })
        .collect();
    assert!(caps.windows(2).all(|w| w[0] >= w[1]));

    let tech = query
        .list_biggest_n_tickers(2, Some(&[Sector::Technology][..]))
        .unwrap();
    assert_eq!(tech, ["NQ3", "NQ1"]);
}

#[test]
fn save_matches_list_line_for_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("t.csv");
    let query = TickerQuery::new(universe());
    let selector = ExchangeSelector::all().without(Exchange::Nasdaq);

    query.save_tickers(&path, selector).unwrap();

    let listed = query.list_tickers(selector).unwrap();
    let saved = read_tickers_csv(BufReader::new(File::open(&path).unwrap())).unwrap();
    assert_eq!(saved, listed);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "NY1\nNY2\nNY3\nAM1\nAM2\n"
    );
}

#[test]
fn save_by_region() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("EU_tickers.csv");
    let query = TickerQuery::new(universe());

    query.save_tickers_by_region(Region::Europe, &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "LSE1\nLSE2\n");
}

#[test]
fn unknown_region_fails_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nowhere.csv");
    let query = TickerQuery::new(universe());

    assert!(matches!(
        query.list_tickers_by_region("OCEANIA_PLUS"),
        Err(TickerError::InvalidRegion(_))
    ));
    assert!(matches!(
        query.save_tickers_by_region("OCEANIA_PLUS", &path),
        Err(TickerError::InvalidRegion(_))
    ));
    assert!(!path.exists());
}

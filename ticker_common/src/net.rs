//! Endpoint constants and request defaults shared by the provider and the binaries.

use std::time::Duration;

/// Public NASDAQ stock screener endpoint.
pub const NASDAQ_SCREENER_URL: &str = "https://api.nasdaq.com/api/screener/stocks";
/// Request timeout applied when the caller does not pick one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Destination used by the `save` operations when no file name is given.
pub const DEFAULT_TICKERS_FILE: &str = "tickers.csv";

/// Default timeout as a `Duration`.
pub fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

/// Browser-like headers; the NASDAQ endpoint stalls on requests without them.
pub fn browser_headers() -> Vec<(&'static str, &'static str)> {
    vec![
        ("authority", "api.nasdaq.com"),
        ("accept", "application/json, text/plain, */*"),
        (
            "user-agent",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/87.0.4280.141 Safari/537.36",
        ),
        ("origin", "https://www.nasdaq.com"),
        ("sec-fetch-site", "same-site"),
        ("sec-fetch-mode", "cors"),
        ("sec-fetch-dest", "empty"),
        ("referer", "https://www.nasdaq.com/"),
        ("accept-language", "en-US,en;q=0.9"),
    ]
}

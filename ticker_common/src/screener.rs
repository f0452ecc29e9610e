//! Screener fetch-to-table.
//!
//! One synchronous GET against a JSON screener endpoint, reshaped into a
//! `Table`. The body must look like:
//!
//! ```json
//! { "data": { "headers": ["A", "B"], "rows": [[1, 2], [3, 4]] } }
//! ```
//!
//! The live NASDAQ endpoint sends `headers` as an object (`{"symbol": "Symbol", ...}`)
//! and each row as an object keyed the same way; that shape is accepted as well,
//! with the object keys as column names in the order received. Every row must
//! have exactly one cell per column, otherwise the response is rejected with
//! `TickerError::MalformedResponse`. No retries, no pagination.
use std::fmt;
use std::time::Duration;

use log::{debug, info};
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use serde_json::Value;

use crate::error::TickerError;
use crate::net::default_timeout;
use crate::result::Result;

/// Ordered column names plus rows of cells aligned positionally to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Build a table, rejecting any row whose length differs from the header count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(TickerError::MalformedResponse(format!(
                "row {i} has {} cells, expected {}",
                row.len(),
                columns.len()
            )));
        }
        Ok(Self { columns, rows })
    }

    /// Decode a screener response body.
    pub fn from_response_body(body: &str) -> Result<Self> {
        let envelope: Envelope = serde_json::from_str(body)
            .map_err(|e| TickerError::MalformedResponse(format!("invalid JSON body: {e}")))?;
        let data = envelope
            .data
            .ok_or_else(|| TickerError::MalformedResponse("missing `data`".to_string()))?;

        let columns = decode_headers(data.headers)?;
        let rows = match data.rows {
            Value::Array(rows) => rows
                .into_iter()
                .enumerate()
                .map(|(i, row)| decode_row(i, row, &columns))
                .collect::<Result<Vec<_>>>()?,
            other => {
                return Err(TickerError::MalformedResponse(format!(
                    "`data.rows` must be an array, got {}",
                    kind_of(&other)
                )));
            }
        };

        Self::new(columns, rows)
    }

    /// Column names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in order.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the column called `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All cells of the column called `name`, top to bottom.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Value>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }
}

/// Tab-separated rendering: a header line, then one line per row.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.columns.join("\t"))?;
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(cell_text).collect();
            writeln!(f, "{}", cells.join("\t"))?;
        }
        Ok(())
    }
}

/// Plain text of a cell: strings unquoted, `null` empty, anything else as JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[derive(Deserialize)]
struct Envelope {
    data: Option<Payload>,
}

#[derive(Deserialize)]
struct Payload {
    headers: Value,
    rows: Value,
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn decode_headers(headers: Value) -> Result<Vec<String>> {
    match headers {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(name) => Ok(name),
                other => Err(TickerError::MalformedResponse(format!(
                    "header must be a string, got {}",
                    kind_of(&other)
                ))),
            })
            .collect(),
        Value::Object(map) => Ok(map.into_iter().map(|(key, _)| key).collect()),
        other => Err(TickerError::MalformedResponse(format!(
            "`data.headers` must be an array or object, got {}",
            kind_of(&other)
        ))),
    }
}

fn decode_row(index: usize, row: Value, columns: &[String]) -> Result<Vec<Value>> {
    match row {
        Value::Array(cells) => Ok(cells),
        Value::Object(mut cells) => {
            if cells.len() != columns.len() {
                return Err(TickerError::MalformedResponse(format!(
                    "row {index} has {} cells, expected {}",
                    cells.len(),
                    columns.len()
                )));
            }
            columns
                .iter()
                .map(|name| {
                    cells.remove(name).ok_or_else(|| {
                        TickerError::MalformedResponse(format!("row {index} is missing `{name}`"))
                    })
                })
                .collect()
        }
        other => Err(TickerError::MalformedResponse(format!(
            "row {index} must be an array or object, got {}",
            kind_of(&other)
        ))),
    }
}

/// Blocking HTTP client for screener endpoints.
#[derive(Debug, Clone)]
pub struct ScreenerClient {
    http: Client,
}

impl ScreenerClient {
    /// Client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// Client with the default timeout.
    pub fn with_default_timeout() -> Result<Self> {
        Self::new(default_timeout())
    }

    /// Issue one GET to `endpoint_url` and decode the body into a `Table`.
    ///
    /// Headers and query parameters are passed through as given.
    pub fn fetch_table<HK, HV, PK, PV>(
        &self,
        endpoint_url: &str,
        headers: &[(HK, HV)],
        query_params: &[(PK, PV)],
    ) -> Result<Table>
    where
        HK: AsRef<str>,
        HV: AsRef<str>,
        PK: AsRef<str>,
        PV: AsRef<str>,
    {
        let url = Url::parse(endpoint_url).map_err(|e| {
            TickerError::InvalidArgument(format!("invalid endpoint URL {endpoint_url}: {e}"))
        })?;
        let header_map = build_header_map(headers)?;
        let params: Vec<(&str, &str)> = query_params
            .iter()
            .map(|(k, v)| (k.as_ref(), v.as_ref()))
            .collect();

        debug!("GET {} params={:?}", url, params);
        let body = self
            .http
            .get(url.clone())
            .headers(header_map)
            .query(&params)
            .send()?
            .error_for_status()?
            .text()?;

        let table = Table::from_response_body(&body)?;
        info!(
            "Screener {} returned {} rows x {} columns",
            url,
            table.len(),
            table.columns().len()
        );
        Ok(table)
    }
}

fn build_header_map<K: AsRef<str>, V: AsRef<str>>(headers: &[(K, V)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let (name, value) = (name.as_ref(), value.as_ref());
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| TickerError::InvalidArgument(format!("invalid header name {name}: {e}")))?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            TickerError::InvalidArgument(format!("invalid value for header {name}: {e}"))
        })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

/// One-shot fetch with a default client (10 s timeout).
pub fn fetch_screener_table<HK, HV, PK, PV>(
    endpoint_url: &str,
    headers: &[(HK, HV)],
    query_params: &[(PK, PV)],
) -> Result<Table>
where
    HK: AsRef<str>,
    HV: AsRef<str>,
    PK: AsRef<str>,
    PV: AsRef<str>,
{
    ScreenerClient::with_default_timeout()?.fetch_table(endpoint_url, headers, query_params)
}

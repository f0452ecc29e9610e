//! Geographic regions used as a filter key for `list_tickers_by_region`.
//!
//! Region text is matched case-insensitively and `-`/space are treated as `_`,
//! so `middle east`, `Middle-East` and `MIDDLE_EAST` all name the same region.
//! Anything else is rejected with `TickerError::InvalidRegion` rather than
//! quietly producing an empty ticker list.
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::error::TickerError;
use crate::result::Result;

/// Closed set of regions understood by the ticker source.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display, EnumIter, Hash, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    Africa,
    Europe,
    Asia,
    AustraliaSouthPacific,
    Caribbean,
    SouthAmerica,
    MiddleEast,
    NorthAmerica,
}

impl Region {
    /// Value of the screener's `region` query parameter.
    pub fn query_value(self) -> &'static str {
        match self {
            Region::Africa => "AFRICA",
            Region::Europe => "EUROPE",
            Region::Asia => "ASIA",
            Region::AustraliaSouthPacific => "AUSTRALIA AND SOUTH PACIFIC",
            Region::Caribbean => "CARIBBEAN",
            Region::SouthAmerica => "SOUTH AMERICA",
            Region::MiddleEast => "MIDDLE EAST",
            Region::NorthAmerica => "NORTH AMERICA",
        }
    }
}

impl FromStr for Region {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();

        Region::iter()
            .find(|r| r.to_string() == normalized)
            .ok_or_else(|| TickerError::InvalidRegion(s.to_string()))
    }
}

/// Anything that can name a region: a `Region` itself or region text.
pub trait IntoRegion {
    /// Resolve to a `Region`, failing with `InvalidRegion` on unknown text.
    fn into_region(self) -> Result<Region>;
}

impl IntoRegion for Region {
    fn into_region(self) -> Result<Region> {
        Ok(self)
    }
}

impl IntoRegion for &str {
    fn into_region(self) -> Result<Region> {
        self.parse()
    }
}

impl IntoRegion for String {
    fn into_region(self) -> Result<Region> {
        self.parse()
    }
}

impl IntoRegion for &String {
    fn into_region(self) -> Result<Region> {
        self.parse()
    }
}

//! Sector tags as reported by the NASDAQ screener.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::error::TickerError;
use crate::result::Result;

/// Closed set of sectors; `Display` yields the screener's label.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display, EnumIter, Hash, Eq, PartialEq)]
pub enum Sector {
    #[serde(rename = "Basic Materials")]
    #[strum(serialize = "Basic Materials")]
    BasicMaterials,
    #[serde(rename = "Consumer Discretionary")]
    #[strum(serialize = "Consumer Discretionary")]
    ConsumerDiscretionary,
    #[serde(rename = "Consumer Staples")]
    #[strum(serialize = "Consumer Staples")]
    ConsumerStaples,
    Energy,
    Finance,
    #[serde(rename = "Health Care")]
    #[strum(serialize = "Health Care")]
    HealthCare,
    Industrials,
    Miscellaneous,
    #[serde(rename = "Real Estate")]
    #[strum(serialize = "Real Estate")]
    RealEstate,
    Technology,
    Telecommunications,
    Utilities,
}

impl Sector {
    /// Lenient lookup for provider-supplied labels; unknown or blank text yields `None`.
    pub fn from_label(label: &str) -> Option<Sector> {
        let wanted = normalize(label);
        if wanted.is_empty() {
            return None;
        }
        Sector::iter().find(|s| normalize(&s.to_string()) == wanted)
    }
}

fn normalize(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| match c {
            '_' | '-' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

impl FromStr for Sector {
    type Err = TickerError;

    /// Strict parse for caller-supplied sectors.
    fn from_str(s: &str) -> Result<Self> {
        Sector::from_label(s)
            .ok_or_else(|| TickerError::InvalidArgument(format!("unknown sector: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for sector in Sector::iter() {
            assert_eq!(sector.to_string().parse::<Sector>().unwrap(), sector);
        }
        assert_eq!(Sector::HealthCare.to_string(), "Health Care");
    }

    #[test]
    fn loose_spelling_is_accepted() {
        assert_eq!("health_care".parse::<Sector>().unwrap(), Sector::HealthCare);
        assert_eq!("TECHNOLOGY".parse::<Sector>().unwrap(), Sector::Technology);
    }

    #[test]
    fn unknown_sector() {
        assert!(matches!(
            "Crypto".parse::<Sector>(),
            Err(TickerError::InvalidArgument(_))
        ));
        assert_eq!(Sector::from_label(""), None);
        assert_eq!(Sector::from_label("n/a"), None);
    }
}

//! Exchanges and the exchange selector used by `list_tickers`/`save_tickers`.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// US exchanges the ticker source knows about.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Exchange {
    Nyse,
    Nasdaq,
    Amex,
}

impl Exchange {
    /// Value of the screener's `exchange` query parameter.
    pub fn query_value(self) -> &'static str {
        match self {
            Exchange::Nyse => "nyse",
            Exchange::Nasdaq => "nasdaq",
            Exchange::Amex => "amex",
        }
    }
}

/// Which exchanges to include. Every exchange is included by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeSelector {
    /// Include NYSE listings.
    pub nyse: bool,
    /// Include NASDAQ listings.
    pub nasdaq: bool,
    /// Include AMEX listings.
    pub amex: bool,
}

impl Default for ExchangeSelector {
    fn default() -> Self {
        Self::all()
    }
}

impl ExchangeSelector {
    /// Selector with all three exchanges enabled.
    pub const fn all() -> Self {
        Self {
            nyse: true,
            nasdaq: true,
            amex: true,
        }
    }

    /// Selector built from the three flags.
    pub const fn new(nyse: bool, nasdaq: bool, amex: bool) -> Self {
        Self { nyse, nasdaq, amex }
    }

    /// Copy of this selector with `exchange` switched off.
    pub fn without(mut self, exchange: Exchange) -> Self {
        match exchange {
            Exchange::Nyse => self.nyse = false,
            Exchange::Nasdaq => self.nasdaq = false,
            Exchange::Amex => self.amex = false,
        }
        self
    }

    /// Whether `exchange` is enabled.
    pub fn includes(&self, exchange: Exchange) -> bool {
        match exchange {
            Exchange::Nyse => self.nyse,
            Exchange::Nasdaq => self.nasdaq,
            Exchange::Amex => self.amex,
        }
    }

    /// Enabled exchanges in NYSE, NASDAQ, AMEX order.
    pub fn enabled(&self) -> Vec<Exchange> {
        Exchange::iter().filter(|e| self.includes(*e)).collect()
    }
}

//! Supported currencies and their notation symbols.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A currency a [`TimeBucks`](crate::TimeBucks) amount can be denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// United States dollar (`$`).
    Usd,
    /// Euro (`€`).
    Eur,
    /// Pound sterling (`£`).
    Gbp,
    /// Japanese yen (`¥`).
    Jpy,
    /// Canadian dollar (`C$`).
    Cad,
    /// Australian dollar (`A$`).
    Aud,
    /// Swiss franc (`CHF`).
    Chf,
    /// Chinese yuan (`CN¥`).
    Cny,
}

/// Notation symbols, longest first so that a parser trying them in order
/// never stops at a shorter symbol sharing a prefix.
pub const SYMBOLS: &[(&str, Currency)] = &[
    ("CN¥", Currency::Cny),
    ("CHF", Currency::Chf),
    ("C$", Currency::Cad),
    ("A$", Currency::Aud),
    ("€", Currency::Eur),
    ("£", Currency::Gbp),
    ("¥", Currency::Jpy),
    ("$", Currency::Usd),
];

impl Currency {
    /// Every supported currency.
    pub const ALL: [Self; 8] = [
        Self::Usd,
        Self::Eur,
        Self::Gbp,
        Self::Jpy,
        Self::Cad,
        Self::Aud,
        Self::Chf,
        Self::Cny,
    ];

    /// The ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
            Self::Chf => "CHF",
            Self::Cny => "CNY",
        }
    }

    /// The symbol written in front of the amount in notation.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy => "¥",
            Self::Cad => "C$",
            Self::Aud => "A$",
            Self::Chf => "CHF",
            Self::Cny => "CN¥",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a currency code is not supported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}

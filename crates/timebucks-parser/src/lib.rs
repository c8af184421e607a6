//! Parser for the TimeBucks notation.
//!
//! A notation names an amount of money, the currency it is in, and the date
//! it belongs to. Values derived by a transformation also carry the method
//! and the source date in brackets:
//!
//! ```text
//! $1,000@1970
//! €50.25@2001-02
//! $800@2024-12-25[CPI:1970-06-15]
//! ```
//!
//! # Example
//!
//! ```
//! use timebucks_parser::{parse, validate};
//! use rust_decimal_macros::dec;
//!
//! let tb = parse("$8,000@2024[CPI:1970]").unwrap();
//! assert_eq!(tb.amount(), dec!(8000));
//! assert!(tb.is_calculated());
//! assert_eq!(tb.to_string(), "$8,000@2024[CPI:1970]");
//!
//! assert!(!validate("100@1970"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
mod parser;
pub mod span;

pub use error::{ParseError, ParseErrorKind};
pub use span::Span;

use rust_decimal::Decimal;
use serde::Serialize;
use timebucks_core::{Currency, DateError, Method, Provenance, TemporalDate, TimeBucks};

/// Parse a notation into a value.
///
/// A bracket suffix makes the value calculated; otherwise it is natural.
///
/// # Errors
///
/// Returns a [`ParseError`] when the input is not a complete notation, names
/// an unsupported currency, or has a date that is not on the calendar.
pub fn parse(input: &str) -> Result<TimeBucks, ParseError> {
    let fields = parser::parse_fields(input)?;
    Ok(match fields.provenance {
        Some(provenance) => {
            TimeBucks::calculated(fields.amount, fields.currency, fields.date, provenance)
        }
        None => TimeBucks::natural(fields.amount, fields.currency, fields.date),
    })
}

/// Whether `input` is a valid notation.
#[must_use]
pub fn validate(input: &str) -> bool {
    parser::parse_fields(input).is_ok()
}

/// Parse a notation into its fields without building a value.
///
/// Accepts exactly the inputs [`parse`] accepts.
pub fn parse_raw(input: &str) -> Result<ParsedNotation, ParseError> {
    let fields = parser::parse_fields(input)?;
    let (method, source) = match fields.provenance {
        Some(Provenance { method, source }) => (Some(method), Some(source)),
        None => (None, None),
    };

    Ok(ParsedNotation {
        currency: fields.currency,
        amount: fields.amount,
        year: fields.date.year(),
        month: fields.date.month(),
        day: fields.date.day(),
        method,
        source_year: source.map(|d| d.year()),
        source_month: source.and_then(|d| d.month()),
        source_day: source.and_then(|d| d.day()),
    })
}

/// The decoded fields of a notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedNotation {
    /// Currency named by the symbol.
    pub currency: Currency,
    /// Amount with commas removed.
    pub amount: Decimal,
    /// Year of the value.
    pub year: i32,
    /// Month of the value, if given.
    pub month: Option<u32>,
    /// Day of the value, if given.
    pub day: Option<u32>,
    /// Transformation method, for calculated values.
    pub method: Option<Method>,
    /// Year of the source value, for calculated values.
    pub source_year: Option<i32>,
    /// Month of the source value, if given.
    pub source_month: Option<u32>,
    /// Day of the source value, if given.
    pub source_day: Option<u32>,
}

impl ParsedNotation {
    /// Whether the notation carried a method and source date.
    pub const fn is_calculated(&self) -> bool {
        self.method.is_some() && self.source_year.is_some()
    }

    /// The date of the value.
    pub fn date(&self) -> Result<TemporalDate, DateError> {
        TemporalDate::new(self.year, self.month, self.day)
    }

    /// The source date, for calculated values.
    pub fn source_date(&self) -> Option<Result<TemporalDate, DateError>> {
        self.source_year
            .map(|year| TemporalDate::new(year, self.source_month, self.source_day))
    }

    /// Build the value these fields describe.
    ///
    /// Fails only if the fields were edited into an invalid date after
    /// parsing.
    pub fn into_value(self) -> Result<TimeBucks, DateError> {
        let date = self.date()?;
        let source = self.source_date().transpose()?;
        match (self.method, source) {
            (Some(method), Some(source)) => Ok(TimeBucks::calculated(
                self.amount,
                self.currency,
                date,
                Provenance::new(method, source),
            )),
            _ => Ok(TimeBucks::natural(self.amount, self.currency, date)),
        }
    }
}

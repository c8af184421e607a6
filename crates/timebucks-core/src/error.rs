//! Error types for dates, index lookups, and transformations.

use crate::Method;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when applying a transformation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// No transformation is registered under the requested name.
    #[error("Transformation method '{0}' not found")]
    UnknownMethod(Method),
    /// The index table has no entry to interpolate or extrapolate from.
    #[error("No {index} data available for year {year}")]
    MissingData {
        /// Name of the index table.
        index: String,
        /// Year that was looked up.
        year: i32,
    },
    /// An index table was given a value that is not strictly positive.
    #[error("{index} value for year {year} must be positive, got {value}")]
    InvalidIndexValue {
        /// Name of the index table.
        index: String,
        /// Year of the offending entry.
        year: i32,
        /// The rejected value.
        value: Decimal,
    },
    /// Decimal arithmetic overflowed while scaling an amount.
    #[error("arithmetic overflow while applying the {0} index")]
    Overflow(String),
}

/// Error returned when a date is malformed or out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Month outside 1..=12.
    #[error("month {0} is out of range (expected 01-12)")]
    MonthOutOfRange(u32),
    /// Day outside 1..=31.
    #[error("day {0} is out of range (expected 01-31)")]
    DayOutOfRange(u32),
    /// A day was given without a month.
    #[error("a day requires a month")]
    DayWithoutMonth,
    /// Month and day are in range but do not name a real day.
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    NotACalendarDate {
        /// Year.
        year: i32,
        /// Month (1-12).
        month: u32,
        /// Day (1-31).
        day: u32,
    },
    /// Text that is not `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    #[error("invalid date '{0}': expected YYYY, YYYY-MM or YYYY-MM-DD")]
    Malformed(String),
}

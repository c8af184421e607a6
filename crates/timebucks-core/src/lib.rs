//! Core types for TimeBucks
//!
//! This crate provides the fundamental types of the TimeBucks notation:
//!
//! - [`TimeBucks`] - An amount of a currency anchored to a date, natural or calculated
//! - [`TemporalDate`] - A year, optionally narrowed to a month and day
//! - [`Currency`] - Supported currencies and their notation symbols
//! - [`IndexTable`] - Sparse year-indexed reference values with interpolation
//! - [`TransformationRegistry`] - Named methods for moving values through time
//! - [`format_notation`] - The canonical notation formatter
//!
//! # Example
//!
//! ```
//! use timebucks_core::{Currency, TemporalDate, TimeBucks, TransformationRegistry};
//! use rust_decimal_macros::dec;
//!
//! let registry = TransformationRegistry::new();
//!
//! // A Model T cost $825 in 1908.
//! let ford = TimeBucks::natural(dec!(825), Currency::Usd, TemporalDate::from_year(1908));
//!
//! let cpi = ford.transform(&registry, "CPI", TemporalDate::from_year(2024)).unwrap();
//! assert_eq!(cpi.to_string(), "$25,858.33@2024[CPI:1908]");
//!
//! let wage = ford.transform(&registry, "WAGE", TemporalDate::from_year(2024)).unwrap();
//! assert!(wage.amount() > cpi.amount());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod currency;
pub mod data;
pub mod date;
pub mod error;
pub mod format;
pub mod index;
pub mod method;
pub mod registry;
pub mod transform;
pub mod value;

pub use currency::{Currency, UnknownCurrency};
pub use date::{MonthDay, TemporalDate};
pub use error::{DateError, TransformError};
pub use format::{format_amount, format_notation};
pub use index::IndexTable;
pub use method::Method;
pub use registry::{MethodSummary, TransformationRegistry};
pub use transform::{builtins, round_amount, Conversion, IndexTransformation, Transformation};
pub use value::{Origin, Provenance, TimeBucks};

// Re-export commonly used external types
pub use rust_decimal::Decimal;

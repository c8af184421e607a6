//! TimeBucks CLI tools.
//!
//! This crate provides command-line tools for working with TimeBucks
//! notation:
//!
//! - `tb-convert`: Convert a value to another date with one or more methods
//! - `tb-check`: Validate notations and explain what is wrong with them
//!
//! # Example Usage
//!
//! ```bash
//! tb-convert '$825@1908' --to 2024 --method CPI --method WAGE
//! tb-convert '$100@1970' --to 2024 --index-file rent.json --method CUSTOM:RENT
//! tb-check '$1,000@1970' '$8,000@2024[CPI:1970]'
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
pub mod report;

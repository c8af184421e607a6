//! Transformations between points in time.
//!
//! A [`Transformation`] turns a value anchored at one date into a calculated
//! value anchored at another. The built-in methods are all
//! [`IndexTransformation`]s: they rescale the amount by the ratio of an
//! index table's values at the target and source years.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::data::{cpi_table, gold_table, wage_table};
use crate::{IndexTable, Method, Provenance, TemporalDate, TimeBucks, TransformError};

/// Decimal places kept in a transformed amount.
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Round a transformed amount to cents, halves away from zero.
#[must_use]
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(AMOUNT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// A named way of moving a value through time.
///
/// Closures with the signature of [`apply`](Transformation::apply) are
/// transformations too, so custom methods can be registered inline.
pub trait Transformation: Send + Sync {
    /// Convert `source` to a calculated value at `target`.
    fn apply(&self, source: &TimeBucks, target: TemporalDate) -> Result<TimeBucks, TransformError>;

    /// Convert and report the rate used, when the method has one.
    fn explain(
        &self,
        source: &TimeBucks,
        target: TemporalDate,
    ) -> Result<Conversion, TransformError> {
        let result = self.apply(source, target)?;
        Ok(Conversion {
            original: source.clone(),
            result,
            rate: None,
        })
    }

    /// One-line human readable description.
    fn description(&self) -> &str {
        "custom transformation"
    }

    /// First and last year the method has reference data for.
    fn coverage(&self) -> Option<(i32, i32)> {
        None
    }
}

impl<F> Transformation for F
where
    F: Fn(&TimeBucks, TemporalDate) -> Result<TimeBucks, TransformError> + Send + Sync,
{
    fn apply(&self, source: &TimeBucks, target: TemporalDate) -> Result<TimeBucks, TransformError> {
        self(source, target)
    }
}

/// A transformation together with the rate it applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// The value that was converted.
    pub original: TimeBucks,
    /// The calculated value.
    pub result: TimeBucks,
    /// `target index / source index`, before rounding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
}

/// Ratio rescaling backed by an [`IndexTable`].
#[derive(Debug, Clone)]
pub struct IndexTransformation {
    method: Method,
    description: String,
    table: IndexTable,
}

impl IndexTransformation {
    /// Create a transformation stamping `method` on its results.
    pub fn new(method: impl Into<Method>, description: impl Into<String>, table: IndexTable) -> Self {
        Self {
            method: method.into(),
            description: description.into(),
            table,
        }
    }

    /// Consumer price index.
    pub fn cpi() -> Self {
        Self::new(
            Method::cpi(),
            "Consumer price index (purchasing power)",
            cpi_table(),
        )
    }

    /// Average wages.
    pub fn wage() -> Self {
        Self::new(
            Method::wage(),
            "Average annual wage (labor value)",
            wage_table(),
        )
    }

    /// Gold price.
    pub fn gold() -> Self {
        Self::new(
            Method::gold(),
            "Gold price per troy ounce (hard-money value)",
            gold_table(),
        )
    }

    /// The method name stamped on results.
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// The backing table.
    pub const fn table(&self) -> &IndexTable {
        &self.table
    }

    /// Ratio of the index at `to_year` over the index at `from_year`.
    pub fn rate(&self, from_year: i32, to_year: i32) -> Result<Decimal, TransformError> {
        let source_rate = self.table.value_for_year(from_year)?;
        let target_rate = self.table.value_for_year(to_year)?;
        target_rate
            .checked_div(source_rate)
            .ok_or_else(|| TransformError::Overflow(self.table.name().to_string()))
    }
}

impl Transformation for IndexTransformation {
    fn apply(&self, source: &TimeBucks, target: TemporalDate) -> Result<TimeBucks, TransformError> {
        self.explain(source, target).map(|c| c.result)
    }

    fn explain(
        &self,
        source: &TimeBucks,
        target: TemporalDate,
    ) -> Result<Conversion, TransformError> {
        let rate = self.rate(source.year(), target.year())?;
        let scaled = source
            .amount()
            .checked_mul(rate)
            .ok_or_else(|| TransformError::Overflow(self.table.name().to_string()))?;

        let result = TimeBucks::calculated(
            round_amount(scaled),
            source.currency(),
            target,
            Provenance::new(self.method.clone(), source.date()),
        );

        Ok(Conversion {
            original: source.clone(),
            result,
            rate: Some(rate),
        })
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn coverage(&self) -> Option<(i32, i32)> {
        self.table.year_range()
    }
}

/// The three built-in transformations: CPI, WAGE and GOLD.
pub fn builtins() -> [IndexTransformation; 3] {
    [
        IndexTransformation::cpi(),
        IndexTransformation::wage(),
        IndexTransformation::gold(),
    ]
}

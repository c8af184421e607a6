//! The time-anchored currency value.
//!
//! A [`TimeBucks`] is an amount of a currency tied to a date. It is either
//! *natural* (stated directly) or *calculated* (derived from another value by
//! a transformation method, remembering the method and the source date).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::format_notation;
use crate::{Currency, Method, TemporalDate, TransformError, TransformationRegistry};

/// Where a calculated value came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Provenance {
    /// The transformation method that produced the value.
    pub method: Method,
    /// The date of the value the transformation started from.
    pub source: TemporalDate,
}

impl Provenance {
    /// Create a provenance record.
    pub fn new(method: impl Into<Method>, source: TemporalDate) -> Self {
        Self {
            method: method.into(),
            source,
        }
    }
}

/// Whether a value was stated directly or derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Origin {
    /// Stated directly for its date.
    Natural,
    /// Produced by a transformation.
    Calculated(Provenance),
}

/// An amount of money anchored to a point in time.
///
/// Values are immutable; "changing" one produces a new value.
///
/// # Examples
///
/// ```
/// use timebucks_core::{Currency, TemporalDate, TimeBucks, TransformationRegistry};
/// use rust_decimal_macros::dec;
///
/// let registry = TransformationRegistry::new();
/// let salary = TimeBucks::natural(dec!(80000), Currency::Usd, TemporalDate::from_year(1930));
/// assert_eq!(salary.to_string(), "$80,000@1930");
///
/// let today = salary.transform(&registry, "CPI", TemporalDate::from_year(2024)).unwrap();
/// assert!(today.is_calculated());
/// assert_eq!(today.to_string(), "$1,486,467.07@2024[CPI:1930]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeBucks {
    amount: Decimal,
    currency: Currency,
    date: TemporalDate,
    origin: Origin,
}

impl TimeBucks {
    /// Create a natural value.
    #[must_use]
    pub const fn natural(amount: Decimal, currency: Currency, date: TemporalDate) -> Self {
        Self {
            amount,
            currency,
            date,
            origin: Origin::Natural,
        }
    }

    /// Create a calculated value.
    #[must_use]
    pub const fn calculated(
        amount: Decimal,
        currency: Currency,
        date: TemporalDate,
        provenance: Provenance,
    ) -> Self {
        Self {
            amount,
            currency,
            date,
            origin: Origin::Calculated(provenance),
        }
    }

    /// The amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// The date the amount is anchored to.
    #[must_use]
    pub const fn date(&self) -> TemporalDate {
        self.date
    }

    /// Shorthand for `self.date().year()`.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.date.year()
    }

    /// Natural or calculated, with provenance.
    #[must_use]
    pub const fn origin(&self) -> &Origin {
        &self.origin
    }

    /// The provenance of a calculated value.
    #[must_use]
    pub const fn provenance(&self) -> Option<&Provenance> {
        match &self.origin {
            Origin::Calculated(p) => Some(p),
            Origin::Natural => None,
        }
    }

    /// The method of a calculated value.
    #[must_use]
    pub fn method(&self) -> Option<&Method> {
        self.provenance().map(|p| &p.method)
    }

    /// The source date of a calculated value.
    #[must_use]
    pub fn source_date(&self) -> Option<TemporalDate> {
        self.provenance().map(|p| p.source)
    }

    /// True iff the value carries provenance.
    #[must_use]
    pub const fn is_calculated(&self) -> bool {
        matches!(self.origin, Origin::Calculated(_))
    }

    /// Exact negation of [`is_calculated`](Self::is_calculated).
    #[must_use]
    pub const fn is_natural(&self) -> bool {
        !self.is_calculated()
    }

    /// Copy with a different amount; every other field, provenance
    /// included, is kept.
    #[must_use]
    pub fn with_amount(&self, amount: Decimal) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }

    /// Copy without provenance.
    #[must_use]
    pub const fn to_natural(&self) -> Self {
        Self::natural(self.amount, self.currency, self.date)
    }

    /// Convert to `target` using the named method from `registry`.
    pub fn transform(
        &self,
        registry: &TransformationRegistry,
        method: &str,
        target: TemporalDate,
    ) -> Result<Self, TransformError> {
        registry.transform(self, method, target)
    }

    /// Render in canonical notation.
    #[must_use]
    pub fn format(&self) -> String {
        format_notation(self)
    }
}

impl fmt::Display for TimeBucks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_notation(self))
    }
}

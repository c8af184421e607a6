//! Sparse year-indexed reference tables.
//!
//! An [`IndexTable`] maps a handful of calendar years to positive index
//! values (a price level, an average wage, a gold price). Years between two
//! tabulated years are linearly interpolated; years outside the table take
//! the value of the nearest end.

use rust_decimal::Decimal;
use std::borrow::Cow;

use crate::TransformError;

/// An immutable year to value table.
///
/// Points are kept sorted by year with no duplicates.
///
/// # Examples
///
/// ```
/// use timebucks_core::IndexTable;
/// use rust_decimal_macros::dec;
///
/// let table = IndexTable::new("RENT", [(2000, dec!(100)), (2010, dec!(150))]).unwrap();
/// assert_eq!(table.value_for_year(2000).unwrap(), dec!(100));
/// assert_eq!(table.value_for_year(2004).unwrap(), dec!(120));
/// assert_eq!(table.value_for_year(1990).unwrap(), dec!(100));
/// assert_eq!(table.value_for_year(2030).unwrap(), dec!(150));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexTable {
    name: Cow<'static, str>,
    points: Cow<'static, [(i32, Decimal)]>,
}

impl IndexTable {
    /// Create a table from arbitrary points.
    ///
    /// Points are sorted by year; when a year repeats, the later point wins.
    /// Every value must be strictly positive.
    pub fn new(
        name: impl Into<String>,
        points: impl IntoIterator<Item = (i32, Decimal)>,
    ) -> Result<Self, TransformError> {
        let name = name.into();
        let mut sorted: Vec<(i32, Decimal)> = Vec::new();

        for (year, value) in points {
            if value <= Decimal::ZERO {
                return Err(TransformError::InvalidIndexValue {
                    index: name,
                    year,
                    value,
                });
            }
            match sorted.binary_search_by_key(&year, |&(y, _)| y) {
                Ok(pos) => sorted[pos].1 = value,
                Err(pos) => sorted.insert(pos, (year, value)),
            }
        }

        Ok(Self {
            name: Cow::Owned(name),
            points: Cow::Owned(sorted),
        })
    }

    /// Wrap embedded reference data.
    ///
    /// `points` must already be sorted by year, without duplicates, with
    /// positive values.
    pub(crate) fn from_static(name: &'static str, points: &'static [(i32, Decimal)]) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
        debug_assert!(points.iter().all(|&(_, v)| v > Decimal::ZERO));
        Self {
            name: Cow::Borrowed(name),
            points: Cow::Borrowed(points),
        }
    }

    /// The table's name, used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tabulated points, sorted by year.
    pub fn points(&self) -> &[(i32, Decimal)] {
        &self.points
    }

    /// Number of tabulated years.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the table has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest and latest tabulated years.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        Some((self.points.first()?.0, self.points.last()?.0))
    }

    /// The index value for `year`.
    ///
    /// Exact years return the stored value. Years between two tabulated
    /// years are linearly interpolated. Years before the first or after the
    /// last entry take that entry's value.
    pub fn value_for_year(&self, year: i32) -> Result<Decimal, TransformError> {
        let pos = match self.points.binary_search_by_key(&year, |&(y, _)| y) {
            Ok(pos) => return Ok(self.points[pos].1),
            Err(pos) => pos,
        };

        let before = pos.checked_sub(1).map(|i| self.points[i]);
        let after = self.points.get(pos).copied();

        match (before, after) {
            (Some(before), Some(after)) => self.interpolate(year, before, after),
            (Some((_, value)), None) | (None, Some((_, value))) => Ok(value),
            (None, None) => Err(TransformError::MissingData {
                index: self.name.to_string(),
                year,
            }),
        }
    }

    fn interpolate(
        &self,
        year: i32,
        (before_year, before_value): (i32, Decimal),
        (after_year, after_value): (i32, Decimal),
    ) -> Result<Decimal, TransformError> {
        let offset = Decimal::from(i64::from(year) - i64::from(before_year));
        let span = Decimal::from(i64::from(after_year) - i64::from(before_year));

        offset
            .checked_div(span)
            .and_then(|ratio| ratio.checked_mul(after_value - before_value))
            .and_then(|delta| before_value.checked_add(delta))
            .ok_or_else(|| TransformError::Overflow(self.name.to_string()))
    }
}

//! Dates of varying precision.
//!
//! A [`TemporalDate`] always has a year and may narrow down to a month, or to
//! a month and a day. A day without a month cannot be represented.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::DateError;

/// Month, optionally narrowed to a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthDay {
    month: u8,
    day: Option<u8>,
}

impl MonthDay {
    /// The month (1-12).
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month as u32
    }

    /// The day of the month, if known.
    #[must_use]
    pub const fn day(self) -> Option<u32> {
        match self.day {
            Some(d) => Some(d as u32),
            None => None,
        }
    }
}

/// A year with optional month and day.
///
/// # Examples
///
/// ```
/// use timebucks_core::TemporalDate;
///
/// let date = TemporalDate::new(1970, Some(6), Some(15)).unwrap();
/// assert_eq!(date.to_string(), "1970-06-15");
/// assert_eq!(TemporalDate::from_year(2024).to_string(), "2024");
///
/// // A day needs a month.
/// assert!(TemporalDate::new(1970, None, Some(15)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemporalDate {
    year: i32,
    within: Option<MonthDay>,
}

impl TemporalDate {
    /// A date known only to the year.
    #[must_use]
    pub const fn from_year(year: i32) -> Self {
        Self { year, within: None }
    }

    /// A date known to the month.
    pub fn from_year_month(year: i32, month: u32) -> Result<Self, DateError> {
        Self::new(year, Some(month), None)
    }

    /// A full calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        Self::new(year, Some(month), Some(day))
    }

    /// Build a date from optional parts, validating ranges.
    ///
    /// A full date must exist in the proleptic Gregorian calendar.
    pub fn new(year: i32, month: Option<u32>, day: Option<u32>) -> Result<Self, DateError> {
        let within = match (month, day) {
            (None, None) => None,
            (None, Some(_)) => return Err(DateError::DayWithoutMonth),
            (Some(m), day) => {
                if !(1..=12).contains(&m) {
                    return Err(DateError::MonthOutOfRange(m));
                }
                if let Some(d) = day {
                    if !(1..=31).contains(&d) {
                        return Err(DateError::DayOutOfRange(d));
                    }
                    if NaiveDate::from_ymd_opt(year, m, d).is_none() {
                        return Err(DateError::NotACalendarDate {
                            year,
                            month: m,
                            day: d,
                        });
                    }
                }
                Some(MonthDay {
                    month: m as u8,
                    day: day.map(|d| d as u8),
                })
            }
        };
        Ok(Self { year, within })
    }

    /// The year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The month (1-12), if known.
    #[must_use]
    pub const fn month(&self) -> Option<u32> {
        match self.within {
            Some(md) => Some(md.month()),
            None => None,
        }
    }

    /// The day of the month, if known.
    #[must_use]
    pub const fn day(&self) -> Option<u32> {
        match self.within {
            Some(md) => md.day(),
            None => None,
        }
    }

    /// Month and day, if the date is more precise than a year.
    #[must_use]
    pub const fn month_day(&self) -> Option<MonthDay> {
        self.within
    }
}

impl fmt::Display for TemporalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year)?;
        if let Some(md) = self.within {
            write!(f, "-{:02}", md.month)?;
            if let Some(day) = md.day {
                write!(f, "-{day:02}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for TemporalDate {
    type Err = DateError;

    /// Parse `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DateError::Malformed(s.to_string());
        let mut parts = s.split('-');

        let year = parts
            .next()
            .filter(|p| p.len() == 4 && p.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(malformed)?;
        let two_digits = |part: Option<&str>| -> Result<Option<u32>, DateError> {
            match part {
                None => Ok(None),
                Some(p) if p.len() == 2 && p.bytes().all(|b| b.is_ascii_digit()) => {
                    p.parse().map(Some).map_err(|_| malformed())
                }
                Some(_) => Err(malformed()),
            }
        };
        let month = two_digits(parts.next())?;
        let day = two_digits(parts.next())?;
        if parts.next().is_some() {
            return Err(malformed());
        }

        Self::new(year.parse().map_err(|_| malformed())?, month, day)
    }
}

impl Serialize for TemporalDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TemporalDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_only() {
        let date = TemporalDate::from_year(1970);
        assert_eq!(date.year(), 1970);
        assert_eq!(date.month(), None);
        assert_eq!(date.day(), None);
    }

    #[test]
    fn test_full_date() {
        let date = TemporalDate::from_ymd(1970, 6, 15).unwrap();
        assert_eq!(date.month(), Some(6));
        assert_eq!(date.day(), Some(15));
        assert_eq!(date.to_string(), "1970-06-15");
    }

    #[test]
    fn test_range_checks() {
        assert_eq!(
            TemporalDate::from_year_month(1970, 13),
            Err(DateError::MonthOutOfRange(13))
        );
        assert_eq!(
            TemporalDate::from_year_month(1970, 0),
            Err(DateError::MonthOutOfRange(0))
        );
        assert_eq!(
            TemporalDate::from_ymd(1970, 6, 32),
            Err(DateError::DayOutOfRange(32))
        );
        assert_eq!(
            TemporalDate::from_ymd(2023, 2, 29),
            Err(DateError::NotACalendarDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert!(TemporalDate::from_ymd(2024, 2, 29).is_ok());
        assert_eq!(
            TemporalDate::new(1970, None, Some(1)),
            Err(DateError::DayWithoutMonth)
        );
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(TemporalDate::from_year(1970).to_string(), "1970");
        assert_eq!(
            TemporalDate::from_year_month(1970, 6).unwrap().to_string(),
            "1970-06"
        );
        assert_eq!(
            TemporalDate::from_ymd(2024, 12, 5).unwrap().to_string(),
            "2024-12-05"
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "2024".parse::<TemporalDate>(),
            Ok(TemporalDate::from_year(2024))
        );
        assert_eq!(
            "2024-12-25".parse::<TemporalDate>(),
            TemporalDate::from_ymd(2024, 12, 25)
        );
        assert!("24".parse::<TemporalDate>().is_err());
        assert!("2024-1".parse::<TemporalDate>().is_err());
        assert!("2024-01-01-01".parse::<TemporalDate>().is_err());
        assert!("2024-13".parse::<TemporalDate>().is_err());
    }
}

//! Canonical notation formatter.
//!
//! Renders a [`TimeBucks`] as
//! `<symbol><amount>@<date>[<method>:<source date>]`, the inverse of the
//! notation parser on the canonical subset:
//!
//! - amounts get `,` thousands separators; integral amounts have no decimal
//!   point; fractional amounts have at least two fraction digits and no
//!   further trailing zeros;
//! - dates are `YYYY`, `YYYY-MM` or `YYYY-MM-DD`;
//! - the bracket suffix is written only for calculated values.

use rust_decimal::Decimal;
use std::fmt::Write;

use crate::TimeBucks;

/// Format a value in canonical notation.
///
/// ```
/// use timebucks_core::{format_notation, Currency, Provenance, TemporalDate, TimeBucks};
/// use rust_decimal_macros::dec;
///
/// let value = TimeBucks::calculated(
///     dec!(800),
///     Currency::Usd,
///     TemporalDate::from_ymd(2024, 12, 25).unwrap(),
///     Provenance::new("CPI", TemporalDate::from_ymd(1970, 6, 15).unwrap()),
/// );
/// assert_eq!(format_notation(&value), "$800@2024-12-25[CPI:1970-06-15]");
/// ```
pub fn format_notation(value: &TimeBucks) -> String {
    let mut out = String::new();
    out.push_str(value.currency().symbol());
    out.push_str(&format_amount(value.amount()));
    write!(out, "@{}", value.date()).unwrap();

    if let Some(provenance) = value.provenance() {
        write!(out, "[{}:{}]", provenance.method, provenance.source).unwrap();
    }

    out
}

/// Format an amount with thousands separators.
///
/// ```
/// use timebucks_core::format_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_amount(dec!(1000)), "1,000");
/// assert_eq!(format_amount(dec!(1000.00)), "1,000");
/// assert_eq!(format_amount(dec!(100.5)), "100.50");
/// assert_eq!(format_amount(dec!(-1234.567)), "-1,234.567");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let normalized = amount.normalize();
    let digits = normalized.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if normalized.is_sign_negative() && !normalized.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        write!(out, ".{fraction:0<2}").unwrap();
    }
    out
}

/// Insert `,` between groups of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Currency, Provenance, TemporalDate};
    use rust_decimal_macros::dec;

    fn natural(amount: Decimal, currency: Currency, date: TemporalDate) -> TimeBucks {
        TimeBucks::natural(amount, currency, date)
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("100"), "100");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("10000"), "10,000");
        assert_eq!(group_thousands("1400000"), "1,400,000");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(0)), "0");
        assert_eq!(format_amount(dec!(0.00)), "0");
        assert_eq!(format_amount(dec!(-0.00)), "0");
        assert_eq!(format_amount(dec!(799.74)), "799.74");
        assert_eq!(format_amount(dec!(100.50)), "100.50");
        assert_eq!(format_amount(dec!(0.1)), "0.10");
        assert_eq!(format_amount(dec!(6400.44)), "6,400.44");
        assert_eq!(format_amount(dec!(-100)), "-100");
    }

    #[test]
    fn test_format_natural() {
        let tb = natural(dec!(1000), Currency::Usd, TemporalDate::from_year(1970));
        assert_eq!(format_notation(&tb), "$1,000@1970");
    }

    #[test]
    fn test_format_currencies() {
        let cases = [
            (Currency::Eur, dec!(100), 2000, "€100@2000"),
            (Currency::Gbp, dec!(50), 1950, "£50@1950"),
            (Currency::Jpy, dec!(10000), 1990, "¥10,000@1990"),
            (Currency::Cad, dec!(100), 2000, "C$100@2000"),
            (Currency::Aud, dec!(100), 2000, "A$100@2000"),
            (Currency::Chf, dec!(100), 2000, "CHF100@2000"),
            (Currency::Cny, dec!(100), 2000, "CN¥100@2000"),
        ];
        for (currency, amount, year, expected) in cases {
            let tb = natural(amount, currency, TemporalDate::from_year(year));
            assert_eq!(format_notation(&tb), expected);
        }
    }

    #[test]
    fn test_format_dates() {
        let month = TemporalDate::from_year_month(1970, 6).unwrap();
        let day = TemporalDate::from_ymd(1970, 6, 15).unwrap();
        assert_eq!(
            format_notation(&natural(dec!(100), Currency::Usd, month)),
            "$100@1970-06"
        );
        assert_eq!(
            format_notation(&natural(dec!(100), Currency::Usd, day)),
            "$100@1970-06-15"
        );
    }

    #[test]
    fn test_format_calculated() {
        let tb = TimeBucks::calculated(
            dec!(6670),
            Currency::Usd,
            TemporalDate::from_year(2024),
            Provenance::new("CPI", TemporalDate::from_year(1970)),
        );
        assert_eq!(format_notation(&tb), "$6,670@2024[CPI:1970]");

        let dated = TimeBucks::calculated(
            dec!(667),
            Currency::Usd,
            TemporalDate::from_ymd(2024, 6, 15).unwrap(),
            Provenance::new("CPI", TemporalDate::from_ymd(1970, 3, 10).unwrap()),
        );
        assert_eq!(format_notation(&dated), "$667@2024-06-15[CPI:1970-03-10]");

        let month_only = TimeBucks::calculated(
            dec!(1),
            Currency::Usd,
            TemporalDate::from_year(2024),
            Provenance::new("GOLD", TemporalDate::from_year_month(1980, 1).unwrap()),
        );
        assert_eq!(format_notation(&month_only), "$1@2024[GOLD:1980-01]");
    }
}

//! Embedded reference data for the built-in methods.
//!
//! US figures: CPI-U annual averages, the SSA national average wage index,
//! and the London gold price in USD per troy ounce.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::IndexTable;

/// Consumer price index (1982-84 = 100).
pub static CPI_POINTS: &[(i32, Decimal)] = &[
    (1913, dec!(9.9)),
    (1920, dec!(20.0)),
    (1930, dec!(16.7)),
    (1940, dec!(14.0)),
    (1950, dec!(24.1)),
    (1960, dec!(29.6)),
    (1970, dec!(38.8)),
    (1980, dec!(82.4)),
    (1990, dec!(130.7)),
    (2000, dec!(172.2)),
    (2010, dec!(218.1)),
    (2020, dec!(258.8)),
    (2024, dec!(310.3)),
];

/// Average annual wage in USD.
pub static WAGE_POINTS: &[(i32, Decimal)] = &[
    (1913, dec!(633)),
    (1920, dec!(1236)),
    (1930, dec!(1368)),
    (1940, dec!(1299)),
    (1950, dec!(2992)),
    (1960, dec!(4007)),
    (1970, dec!(6186)),
    (1980, dec!(12513)),
    (1990, dec!(21027)),
    (2000, dec!(32154)),
    (2010, dec!(41673)),
    (2020, dec!(51916)),
    (2024, dec!(59384)),
];

/// Gold price in USD per troy ounce.
pub static GOLD_POINTS: &[(i32, Decimal)] = &[
    (1913, dec!(20.67)),
    (1920, dec!(20.67)),
    (1930, dec!(20.67)),
    (1940, dec!(35.00)),
    (1950, dec!(40.25)),
    (1960, dec!(35.27)),
    (1970, dec!(36.56)),
    (1980, dec!(607.97)),
    (1990, dec!(383.51)),
    (2000, dec!(279.11)),
    (2010, dec!(1224.53)),
    (2020, dec!(1770.75)),
    (2024, dec!(2340.00)),
];

/// The consumer price index table.
pub fn cpi_table() -> IndexTable {
    IndexTable::from_static("CPI", CPI_POINTS)
}

/// The average wage table.
pub fn wage_table() -> IndexTable {
    IndexTable::from_static("wage", WAGE_POINTS)
}

/// The gold price table.
pub fn gold_table() -> IndexTable {
    IndexTable::from_static("gold price", GOLD_POINTS)
}

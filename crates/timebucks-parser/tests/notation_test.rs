//! Integration tests for the notation parser.
//!
//! Checks that canonical notations survive a parse and format round trip,
//! and that rejected input produces useful diagnostics.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use timebucks_core::{Currency, TemporalDate, TimeBucks, TransformationRegistry};
use timebucks_parser::{parse, parse_raw, validate, ParseErrorKind};

// ============================================================================
// Helper Functions
// ============================================================================

fn round_trip(input: &str) -> String {
    parse(input)
        .unwrap_or_else(|e| panic!("{input} failed to parse: {e:?}"))
        .to_string()
}

fn error_summary(input: &str) -> String {
    let err = parse(input).unwrap_err();
    format!("{}..{} {}", err.span.start, err.span.end, err.message())
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_round_trip_canonical_examples() {
    for input in [
        "$1,000@1970",
        "$8,000@2024[CPI:1970]",
        "$100@1970-06-15",
        "$800@2024-12-25[CPI:1970-06-15]",
    ] {
        assert_eq!(round_trip(input), input);
    }
}

#[test]
fn test_round_trip_every_symbol() {
    for input in [
        "€50.25@2001-02",
        "£12.50@1999",
        "¥10,000@1990",
        "C$1.00@2010",
        "A$999,999.99@2020-12-31",
        "CHF0.05@1985",
        "CN¥88@2008-08-08",
    ] {
        assert_eq!(round_trip(input), input);
    }
}

#[test]
fn test_non_canonical_input_is_normalized() {
    insta::assert_snapshot!(round_trip("$1000@1970"), @"$1,000@1970");
    insta::assert_snapshot!(round_trip("$1,0,0,0@1970"), @"$1,000@1970");
    insta::assert_snapshot!(round_trip("$100.00@1970"), @"$100@1970");
    insta::assert_snapshot!(round_trip("$0001@1970"), @"$1@1970");
}

#[test]
fn test_amounts_at_the_precision_limit() {
    let largest = "$79,228,162,514,264,337,593,543,950,335@1970";
    assert_eq!(round_trip(largest), largest);
    let fractional = "$9,999,999,999,999,999,999,999,999.99@1970";
    assert_eq!(round_trip(fractional), fractional);

    for input in [
        "$9,999,999,999,999,999,999,999,999,999.99@1970",
        "$99,999,999,999,999,999,999,999,999,999@1970",
    ] {
        assert!(!validate(input), "{input} should not validate");
        let err = parse(input).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::InvalidAmount(_)), "{input}");
        assert!(err.hint.unwrap_or_default().contains("28 significant digits"));
    }
}

#[test]
fn test_transformed_values_reparse() {
    let registry = TransformationRegistry::new();
    let source = parse("$100@1970").unwrap();

    for method in ["CPI", "WAGE", "GOLD"] {
        let converted = source
            .transform(&registry, method, TemporalDate::from_year(2024))
            .unwrap();
        let text = converted.to_string();
        assert_eq!(parse(&text).unwrap(), converted, "{text}");
    }
}

#[test]
fn test_calculated_value_converts_again() {
    let registry = TransformationRegistry::new();
    let value = parse("$799.74@2024[CPI:1970]").unwrap();
    let back = value
        .transform(&registry, "CPI", TemporalDate::from_year(1970))
        .unwrap();
    assert_eq!(back.amount(), dec!(100));
    insta::assert_snapshot!(back.to_string(), @"$100@1970[CPI:2024]");
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_error_spans_and_messages() {
    insta::assert_snapshot!(error_summary("invalid notation"), @"0..1 unknown currency symbol 'i'");
    insta::assert_snapshot!(error_summary("$100"), @"4..4 expected '@' before the date");
    insta::assert_snapshot!(error_summary("100@1970"), @"0..1 unknown currency symbol '1'");
    insta::assert_snapshot!(error_summary("₹100@1970"), @"0..3 unknown currency symbol '₹'");
    insta::assert_snapshot!(error_summary("$100.5@1970"), @"1..6 invalid amount '100.5'");
    insta::assert_snapshot!(
        error_summary("$100@1970-02-30"),
        @"5..15 invalid date: 1970-02-30 is not a calendar date"
    );
    insta::assert_snapshot!(error_summary("$100@2024[cpi:1970]"), @"10..13 invalid method 'cpi'");
}

#[test]
fn test_errors_never_carry_partial_values() {
    let err = parse("$100@1970[CPI:1960").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnclosedBracket);
    assert_eq!(err.to_string(), "Invalid TimeBucks notation: $100@1970[CPI:1960");
    assert_eq!(err.span.text(&err.input), Some("[CPI:1960"));
}

#[test]
fn test_unknown_currency_hint_lists_symbols() {
    let err = parse("₹100@1970").unwrap_err();
    insta::assert_snapshot!(
        err.hint.unwrap_or_default(),
        @"supported symbols: CN¥ CHF C$ A$ € £ ¥ $"
    );
}

#[test]
fn test_validate_agrees_with_parse() {
    for input in ["$100@1970", "", "$", "$1@1970-", "€1.23@2000[X:2000]", "£1@2000]"] {
        assert_eq!(validate(input), parse(input).is_ok(), "{input:?}");
        assert_eq!(validate(input), parse_raw(input).is_ok(), "{input:?}");
    }
}

// ============================================================================
// Generated Round Trips
// ============================================================================

fn arb_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

fn arb_amount() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        (0i64..100_000_000i64).prop_map(Decimal::from),
        (0i64..100_000_000i64).prop_map(|n| Decimal::new(n, 2)),
    ]
}

fn arb_date() -> impl Strategy<Value = TemporalDate> {
    prop_oneof![
        (1000i32..10000i32).prop_map(TemporalDate::from_year),
        (1000i32..10000i32, 1u32..13u32)
            .prop_map(|(y, m)| TemporalDate::from_year_month(y, m).unwrap()),
        (1000i32..10000i32, 1u32..13u32, 1u32..29u32)
            .prop_map(|(y, m, d)| TemporalDate::from_ymd(y, m, d).unwrap()),
    ]
}

fn arb_method() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("CPI".to_string()),
        Just("WAGE".to_string()),
        Just("GOLD".to_string()),
        "[A-Z]{1,8}(:[A-Z0-9]{1,8})?",
    ]
}

proptest! {
    #[test]
    fn prop_natural_round_trip(currency in arb_currency(), amount in arb_amount(), date in arb_date()) {
        let value = TimeBucks::natural(amount, currency, date);
        let text = value.to_string();
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(parsed.to_string(), text);
        prop_assert_eq!(parsed.amount(), amount);
        prop_assert_eq!(parsed.date(), date);
    }

    #[test]
    fn prop_calculated_round_trip(
        currency in arb_currency(),
        amount in arb_amount(),
        date in arb_date(),
        method in arb_method(),
        source in arb_date(),
    ) {
        let value = TimeBucks::calculated(
            amount,
            currency,
            date,
            timebucks_core::Provenance::new(method.as_str(), source),
        );
        let text = value.to_string();
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(parsed.to_string(), text);
        prop_assert_eq!(parsed.method().map(|m| m.as_str()), Some(method.as_str()));
        prop_assert_eq!(parsed.source_date(), Some(source));
    }

    #[test]
    fn prop_validate_never_panics(input in "\\PC{0,40}") {
        let _ = validate(&input);
    }

    #[test]
    fn prop_near_misses_never_panic(input in "[$€C¥A]{0,2}[0-9,.]{0,8}@?[0-9-]{0,11}(\\[[A-Z:0-9-]{0,14}\\]?)?") {
        prop_assert_eq!(validate(&input), parse(&input).is_ok());
    }
}

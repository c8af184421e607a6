//! Notation parser benchmarks.
//!
//! Run with: cargo bench -p timebucks-parser

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use timebucks_parser::{parse, validate};

/// Generate `n` distinct notations, a third of them calculated.
fn generate_notations(n: usize) -> Vec<String> {
    let symbols = ["$", "€", "£", "C$", "CHF"];
    let methods = ["CPI", "WAGE", "GOLD", "CUSTOM:RENT"];
    (0..n)
        .map(|i| {
            let symbol = symbols[i % symbols.len()];
            let year = 1900 + (i % 125);
            let amount = format!("{},{:03}.{:02}", i % 1000, i % 997, i % 100);
            match i % 3 {
                0 => format!(
                    "{symbol}{amount}@{year}[{}:{}]",
                    methods[i % methods.len()],
                    year - (i % 50)
                ),
                1 => format!("{symbol}{amount}@{year}-{:02}", 1 + i % 12),
                _ => format!("{symbol}{amount}@{year}-{:02}-{:02}", 1 + i % 12, 1 + i % 28),
            }
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let notations = generate_notations(1000);
    let bytes: usize = notations.iter().map(String::len).sum();

    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(bytes as u64));
    group.bench_function("1000_notations", |b| {
        b.iter(|| {
            for notation in &notations {
                let _ = black_box(parse(black_box(notation)));
            }
        });
    });
    group.finish();
}

fn bench_validate_invalid(c: &mut Criterion) {
    let inputs = ["invalid notation", "$100", "100@1970", "₹100@1970", "$1@2024[cpi:1970]"];
    c.bench_function("validate_invalid", |b| {
        b.iter(|| {
            for input in inputs {
                black_box(validate(black_box(input)));
            }
        });
    });
}

fn bench_round_trip(c: &mut Criterion) {
    let notations = generate_notations(100);
    c.bench_function("round_trip_100", |b| {
        b.iter(|| {
            for notation in &notations {
                if let Ok(value) = parse(notation) {
                    black_box(value.to_string());
                }
            }
        });
    });
}

criterion_group!(benches, bench_parse, bench_validate_invalid, bench_round_trip);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};
use decima::{parse_decimal, ByteSpan, Decimal};
use std::hint::black_box;
use std::str::FromStr;

fn bench_decimal_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decimal Text");

    let short = Decimal::from_str("12345").unwrap();
    let fractional = Decimal::from_str("-3.14159265358979323846").unwrap();
    let overlong = "9".repeat(40);

    // short integer literal
    group.bench_function("parse_short", |b| {
        b.iter(|| {
            let res = Decimal::from_str(black_box("12345"));
            black_box(res)
        })
    });

    // fractional literal with sign
    group.bench_function("parse_fractional", |b| {
        b.iter(|| {
            let res = Decimal::from_str(black_box("-3.14159265358979323846"));
            black_box(res)
        })
    });

    // literal long enough to fall into exponent scaling
    group.bench_function("parse_overlong", |b| {
        b.iter(|| {
            let res = Decimal::from_str(black_box(&overlong));
            black_box(res)
        })
    });

    // embedded scan with partial consumption
    group.bench_function("parse_embedded", |b| {
        b.iter(|| {
            let res = parse_decimal(
                ByteSpan::from(black_box("12.5, 17.25]")),
                ByteSpan::from("."),
                false,
            );
            black_box(res)
        })
    });

    group.bench_function("format_short", |b| {
        b.iter(|| {
            let res = black_box(&short).to_string();
            black_box(res)
        })
    });

    group.bench_function("format_fractional", |b| {
        b.iter(|| {
            let res = black_box(&fractional).to_string();
            black_box(res)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_decimal_text);
criterion_main!(benches);

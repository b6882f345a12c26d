//! Span throughput benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use unispan_core::UnicodeSpanSet;
use unispan_engine::{span, span_and_count, SpanCondition};

fn overlapping_set() -> UnicodeSpanSet {
    let mut set = UnicodeSpanSet::new();
    set.add_char('a').unwrap();
    set.add_string("ab").unwrap();
    set.add_string("abc").unwrap();
    set.add_string("cd").unwrap();
    set.freeze();
    set
}

fn ascii_set() -> UnicodeSpanSet {
    let mut set = UnicodeSpanSet::from_range('a' as u32, 'z' as u32).unwrap();
    set.freeze();
    set
}

fn bench_span(c: &mut Criterion) {
    let text: Vec<u16> = "acdabcdabccd".repeat(200).encode_utf16().collect();
    let set = overlapping_set();

    c.bench_function("span_contained_overlapping", |b| {
        b.iter(|| span(&set, black_box(&text), 0, SpanCondition::Contained).unwrap())
    });

    c.bench_function("span_simple_overlapping", |b| {
        b.iter(|| span(&set, black_box(&text), 0, SpanCondition::Simple).unwrap())
    });

    c.bench_function("span_and_count_contained", |b| {
        b.iter(|| span_and_count(&set, black_box(&text), 0, SpanCondition::Contained).unwrap())
    });

    let ascii = ascii_set();
    let letters: Vec<u16> = "the quick brown fox".repeat(200).encode_utf16().collect();
    c.bench_function("span_code_points_only", |b| {
        b.iter(|| span(&ascii, black_box(&letters), 0, SpanCondition::Contained).unwrap())
    });
}

criterion_group!(benches, bench_span);
criterion_main!(benches);

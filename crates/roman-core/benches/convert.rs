use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use roman_core::{format, parse, LargeMode, SymbolMode};

static VALUES: &[(&str, i64)] = &[
    ("small", 8),
    ("year", 1994),
    ("max_plain", 4999),
    ("mid", 123_456),
    ("ceiling", 2_147_483_647),
];

static LARGE_MODES: &[LargeMode] = &[LargeMode::Apostrophus, LargeMode::Cifrao];

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert/format");
    for &large in LARGE_MODES {
        for &(label, value) in VALUES {
            group.bench_with_input(BenchmarkId::new(large.name(), label), &value, |b, &v| {
                b.iter(|| format(v, large, SymbolMode::Strict).unwrap());
            });
        }
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert/parse");
    for &large in LARGE_MODES {
        for &(label, value) in VALUES {
            let text = format(value, large, SymbolMode::Strict).unwrap();
            group.bench_with_input(BenchmarkId::new(large.name(), label), &text, |b, text| {
                b.iter(|| parse(text, SymbolMode::Strict, large).unwrap());
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_format, bench_parse);
criterion_main!(benches);

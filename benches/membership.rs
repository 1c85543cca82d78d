//! Benchmarks for regcat class lookups and folding
//!
//! Compares the block index against a linear range scan, and measures the
//! one-off cost of decoding every table.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use regcat::{tables, Category, Folding, PredicateCache, Registry};

// Mixed Latin, Greek, CJK and punctuation, all inside the BMP.
const TEXT: &str = "The quick brown fox, ὁ ταχὺς καφέ 狐狸 jumps (over) [the] lazy dog 123.";

fn codes() -> Vec<u16> {
    TEXT.chars()
        .filter_map(|c| u16::try_from(u32::from(c)).ok())
        .collect()
}

fn bench_contains(c: &mut Criterion) {
    let registry = Registry::new().unwrap();
    let codes = codes();
    let mut group = c.benchmark_group("contains");

    for name in ["Lu", "Ll", "Nd", "Zh", "Jp"] {
        let category = registry.lookup(name).unwrap();

        group.bench_with_input(BenchmarkId::new("index", name), category, |b, category| {
            b.iter(|| {
                codes
                    .iter()
                    .filter(|&&code| category.contains(black_box(code)))
                    .count()
            })
        });

        group.bench_with_input(BenchmarkId::new("scan", name), category, |b, category| {
            b.iter(|| {
                codes
                    .iter()
                    .filter(|&&code| category.ranges().contains(black_box(code)))
                    .count()
            })
        });
    }

    group.finish();
}

fn bench_full_sweep(c: &mut Criterion) {
    let registry = Registry::new().unwrap();
    let lo = registry.lookup("Lo").unwrap();

    c.bench_function("sweep_bmp_lo", |b| {
        b.iter(|| (0..=u16::MAX).filter(|&code| lo.contains(black_box(code))).count())
    });
}

fn bench_folding(c: &mut Criterion) {
    let folding = Folding::new();
    let mut group = c.benchmark_group("folding");

    group.bench_function("case_fold", |b| {
        b.iter(|| TEXT.chars().map(|ch| folding.case_fold(black_box(ch))).count())
    });

    group.bench_function("fold_eq", |b| {
        let upper = TEXT.to_uppercase();
        b.iter(|| {
            TEXT.chars()
                .zip(upper.chars())
                .filter(|&(x, y)| folding.fold_eq(black_box(x), black_box(y)))
                .count()
        })
    });

    group.bench_function("reverse_with_brackets", |b| {
        b.iter(|| folding.reverse_with_brackets(black_box(TEXT)))
    });

    group.finish();
}

fn bench_predicate(c: &mut Criterion) {
    let registry = Registry::new().unwrap();
    let cache = PredicateCache::new();
    let letters = cache.class(registry.lookup("L").unwrap());
    let upper = cache.class(registry.lookup("Lu").unwrap());
    let predicate = cache.intersection(&[letters, cache.not(&upper)]);
    let codes = codes();

    c.bench_function("predicate_matches", |b| {
        b.iter(|| {
            codes
                .iter()
                .filter(|&&code| predicate.matches(black_box(code)))
                .count()
        })
    });
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    group.bench_function("registry", |b| b.iter(|| Registry::new().unwrap()));

    group.bench_function("category_lo", |b| {
        b.iter(|| Category::from_encoded(black_box(&tables::LO)).unwrap())
    });

    group.bench_function("folding", |b| b.iter(Folding::new));

    group.finish();
}

criterion_group!(
    benches,
    bench_contains,
    bench_full_sweep,
    bench_folding,
    bench_predicate,
    bench_build,
);
criterion_main!(benches);

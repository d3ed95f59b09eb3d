//! Benchmarks for context building
//!
//! Run with: cargo bench --package assistant
//!
//! Uses the sample snapshot under data/sample.

use assistant::{ContextBuilder, ContextLimits};
use catalog::CatalogSnapshot;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::Path;

fn load_test_data() -> CatalogSnapshot {
    let data_dir = Path::new("../../data/sample");
    CatalogSnapshot::load_from_dir(data_dir).expect("Failed to load sample data")
}

fn bench_genre_context(c: &mut Criterion) {
    let snapshot = load_test_data();
    let builder = ContextBuilder::new(ContextLimits::default());

    c.bench_function("build_context_rom_com", |b| {
        b.iter(|| {
            let text = builder.build(
                &snapshot.catalog,
                &snapshot.genres,
                black_box("Any good rom-coms for tonight?"),
                &snapshot.favorites,
            );
            black_box(text)
        })
    });
}

fn bench_category_context(c: &mut Criterion) {
    let snapshot = load_test_data();
    let builder = ContextBuilder::new(ContextLimits::default());

    c.bench_function("build_context_now_playing", |b| {
        b.iter(|| {
            let text = builder.build(
                &snapshot.catalog,
                &snapshot.genres,
                black_box("What's playing in theaters?"),
                &snapshot.favorites,
            );
            black_box(text)
        })
    });
}

fn bench_general_context(c: &mut Criterion) {
    let snapshot = load_test_data();
    let builder = ContextBuilder::new(ContextLimits::default());

    c.bench_function("build_context_general", |b| {
        b.iter(|| {
            let text = builder.build(
                &snapshot.catalog,
                &snapshot.genres,
                black_box("What should I watch?"),
                &snapshot.favorites,
            );
            black_box(text)
        })
    });
}

criterion_group!(
    benches,
    bench_genre_context,
    bench_category_context,
    bench_general_context
);
criterion_main!(benches);

//! Benchmarks for catalog title resolution
//!
//! Run with: cargo bench --package results

use catalog::{CatalogRow, MovieCatalog, columns};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use results::resolve;

fn build_catalog(rows: usize) -> MovieCatalog {
    MovieCatalog::from_rows((0..rows).map(|i| {
        CatalogRow::new()
            .with(columns::TITLE, format!("Synthetic Movie {i}"))
            .with(columns::YEAR, (1950 + i % 70) as f64)
            .with(columns::GENRES, vec!["Drama"])
    }))
}

fn bench_exact_match(c: &mut Criterion) {
    let catalog = build_catalog(45_000);

    c.bench_function("resolve_exact", |b| {
        b.iter(|| black_box(resolve(&catalog, black_box("Synthetic Movie 40000"))))
    });
}

fn bench_substring_fallback(c: &mut Criterion) {
    let catalog = build_catalog(45_000);

    c.bench_function("resolve_substring", |b| {
        b.iter(|| black_box(resolve(&catalog, black_box("movie 44999"))))
    });
}

fn bench_miss(c: &mut Criterion) {
    let catalog = build_catalog(45_000);

    c.bench_function("resolve_miss", |b| {
        b.iter(|| black_box(resolve(&catalog, black_box("No Such Title"))))
    });
}

criterion_group!(benches, bench_exact_match, bench_substring_fallback, bench_miss);
criterion_main!(benches);

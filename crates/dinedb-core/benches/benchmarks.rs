//! Benchmarks for the query, suggestion and ranking paths on a synthetic
//! catalog.

use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use dinedb_core::prelude::*;
use std::hint::black_box;

const CUISINES: [&str; 6] = ["Italian", "Japanese", "Cafe", "Steakhouse", "Mediterranean", "American"];
const OCCASIONS: [&str; 5] = ["Date Night", "Family", "Business", "Friends", "Casual"];

/// Generate `count` restaurants scattered around lower Manhattan.
fn generate_catalog(count: usize) -> Catalog {
    let restaurants = (0..count)
        .map(|i| Restaurant {
            id: i.to_string(),
            name: format!("Restaurant {i}"),
            image: None,
            rating: 3.0 + (i % 20) as f32 / 10.0,
            review_count: (i * 7 % 500) as u32,
            cuisine: CUISINES[i % CUISINES.len()].to_string(),
            price_range: PriceRange::Moderate,
            location: format!("District {}", i % 40),
            occasions: vec![OCCASIONS[i % OCCASIONS.len()].to_string()],
            coordinates: (i % 10 != 0).then(|| {
                Coordinates::new(
                    40.70 + (i % 97) as f64 * 0.001,
                    -74.02 + (i % 89) as f64 * 0.001,
                )
            }),
        })
        .collect();
    Catalog::new(restaurants).expect("synthetic catalog is valid")
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for size in [100, 1_000, 10_000] {
        let catalog = generate_catalog(size);
        let text = SearchQuery::new("date").with_location("district 1");
        let ranked = SearchQuery::new("italian").with_origin(Coordinates::new(40.7128, -74.0060));

        group.bench_with_input(BenchmarkId::new("text", size), &catalog, |b, catalog| {
            b.iter(|| catalog.search(black_box(&text)))
        });
        group.bench_with_input(BenchmarkId::new("ranked", size), &catalog, |b, catalog| {
            b.iter(|| catalog.search(black_box(&ranked)))
        });
    }
    group.finish();
}

fn bench_suggest(c: &mut Criterion) {
    let catalog = generate_catalog(10_000);
    c.bench_function("suggest/10000", |b| b.iter(|| catalog.suggest(black_box("fam"))));
}

fn bench_near(c: &mut Criterion) {
    let catalog = generate_catalog(10_000);
    let origin = Coordinates::new(40.7128, -74.0060);
    c.bench_function("near/10000", |b| b.iter(|| catalog.near(black_box(origin))));
}

criterion_group!(benches, bench_search, bench_suggest, bench_near);
criterion_main!(benches);

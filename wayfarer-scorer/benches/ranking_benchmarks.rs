//! Criterion benchmarks for similarity ranking.
//!
//! Measures country and city ranking across pool sizes to track the cost of
//! scoring every candidate against a target.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package wayfarer-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use wayfarer_scorer::{DEFAULT_LIMIT, DestinationScorer, SimilarityRanker};

mod bench_support;

use bench_support::{BENCHMARK_SEED, generate_cities, generate_countries};

/// Candidate pool sizes to benchmark.
const POOL_SIZES: &[u64] = &[100, 1_000, 5_000];

/// Countries backing the city benchmark.
const COUNTRY_COUNT: u64 = 200;

fn bench_country_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_countries");
    let ranker: SimilarityRanker = SimilarityRanker::default();

    for &size in POOL_SIZES {
        let countries = generate_countries(size, BENCHMARK_SEED);
        let Some(target) = countries.first() else {
            continue;
        };
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("candidates", size), &size, |b, _| {
            b.iter(|| ranker.similar_countries(target, &countries).len());
        });
    }

    group.finish();
}

fn bench_city_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_cities");
    let ranker = SimilarityRanker::new(DestinationScorer::default()).with_limit(DEFAULT_LIMIT);
    let countries = generate_countries(COUNTRY_COUNT, BENCHMARK_SEED);

    for &size in POOL_SIZES {
        let cities = generate_cities(size, COUNTRY_COUNT, BENCHMARK_SEED);
        let Some(target) = cities.first() else {
            continue;
        };
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("candidates", size), &size, |b, _| {
            b.iter(|| {
                ranker
                    .similar_cities(target, None, &cities, &countries)
                    .len()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_country_ranking, bench_city_ranking);
criterion_main!(benches);

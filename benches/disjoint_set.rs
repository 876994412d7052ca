//! A random join storm against the disjoint-set forest.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use densekit::DisjointSetForest;
use rand::Rng;

fn bench_join(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("join");

    for nsets in [100u32, 1_000, 10_000, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(nsets), &nsets, |bencher, &nsets| {
            let mut forest = DisjointSetForest::<u32>::new(nsets as usize);
            let mut rng = rand::rng();

            bencher.iter(|| {
                let first = rng.random_range(0..nsets);
                let second = rng.random_range(0..nsets);

                forest.join(first, second).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_join);
criterion_main!(benches);

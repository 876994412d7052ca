//! A random upsert storm against the indexed priority queue.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use densekit::IndexedPriorityQueue;
use rand::Rng;

fn bench_set_priority(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_priority");

    for nelems in [100u32, 1_000, 10_000, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(nelems), &nelems, |bencher, &nelems| {
            let mut queue = IndexedPriorityQueue::<u32, u32>::with_capacity(nelems as usize);
            let mut rng = rand::rng();

            bencher.iter(|| {
                let elem = rng.random_range(0..nelems);
                let prio = rng.random_range(0..nelems);

                queue.set_priority(elem, prio).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_set_priority);
criterion_main!(benches);

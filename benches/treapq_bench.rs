//! Criterion benchmarks for the core operations.

use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use treapq::Treapq;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn shuffled(n: usize, seed: u64) -> Vec<u64> {
    let mut orders: Vec<u64> = (0..n as u64).collect();
    orders.shuffle(&mut StdRng::seed_from_u64(seed));
    orders
}

fn filled(orders: &[u64]) -> Treapq<usize, u64> {
    let mut treapq = Treapq::with_capacity(orders.len());
    for (key, &order) in orders.iter().enumerate() {
        treapq.put(key, order);
    }
    treapq
}

fn bench_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("put");
    for n in SIZES {
        let orders = shuffled(n, 1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &orders, |b, orders| {
            b.iter(|| black_box(filled(orders)));
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    for n in SIZES {
        let orders = shuffled(n, 2);
        let mut victims: Vec<usize> = (0..n).collect();
        victims.shuffle(&mut StdRng::seed_from_u64(3));
        group.bench_with_input(BenchmarkId::from_parameter(n), &orders, |b, orders| {
            b.iter_batched(
                || filled(orders),
                |mut treapq| {
                    for key in &victims {
                        black_box(treapq.remove(key).ok());
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_extract_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_min");
    for n in SIZES {
        let orders = shuffled(n, 4);
        group.bench_with_input(BenchmarkId::from_parameter(n), &orders, |b, orders| {
            b.iter_batched(
                || filled(orders),
                |mut treapq| {
                    while let Some(entry) = treapq.extract_min() {
                        black_box(entry);
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_get_and_iterate(c: &mut Criterion) {
    let orders = shuffled(100_000, 5);
    let treapq = filled(&orders);

    c.bench_function("get/100000", |b| {
        let mut key = 0usize;
        b.iter(|| {
            key = (key + 7919) % orders.len();
            black_box(treapq.get(&key).ok());
        });
    });

    c.bench_function("items/100000", |b| {
        b.iter(|| black_box(treapq.items(false).count()));
    });
}

criterion_group!(benches, bench_put, bench_remove, bench_extract_min, bench_get_and_iterate);
criterion_main!(benches);

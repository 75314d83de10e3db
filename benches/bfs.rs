use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use pargraphs::{
    algo::{ParallelBfs, Traversal},
    executor::{RayonPool, ScopedThreads},
    gens::RandomGraph,
    prelude::*,
};

fn instances() -> Vec<(String, AdjArray)> {
    let rng = &mut Pcg64Mcg::seed_from_u64(12345);

    [(1_000, 10_000), (10_000, 100_000), (50_000, 1_000_000)]
        .into_iter()
        .map(|(n, m)| (format!("n{n}_m{m}"), AdjArray::gnm(rng, n, m)))
        .collect()
}

fn bench_serial_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("serial_bfs");

    for (name, graph) in instances() {
        group.bench_function(BenchmarkId::from_parameter(&name), |b| {
            b.iter(|| black_box(graph.bfs(black_box(0)).count()));
        });
    }

    group.finish();
}

fn bench_parallel_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_bfs");

    for (name, graph) in instances() {
        for workers in [2, 4, 8] {
            group.bench_function(BenchmarkId::new(format!("scoped_w{workers}"), &name), |b| {
                let mut engine = ParallelBfs::new().workers(workers);
                b.iter(|| engine.run(black_box(&graph), black_box(0), &ScopedThreads).unwrap());
            });

            let pool = RayonPool::new(workers).unwrap();
            group.bench_function(BenchmarkId::new(format!("rayon_w{workers}"), &name), |b| {
                let mut engine = ParallelBfs::new().workers(workers);
                b.iter(|| engine.run(black_box(&graph), black_box(0), &pool).unwrap());
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_serial_bfs, bench_parallel_bfs);
criterion_main!(benches);

use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use sparsevec::SparseVector;
use sparsevec::workload::{Workload, WorkloadConfig, dot_by_map_keys, dot_by_map_traversal};

fn benchmark_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot");
    group.measurement_time(Duration::from_secs(10));

    // (dense dimension, sparse draws)
    let test_cases = vec![(10_000, 100), (1_000_000, 10_000)];

    for (dim, draws) in test_cases {
        let config = WorkloadConfig {
            dense_dim: dim,
            sparse_dim: dim as u32,
            sparse_draws: draws,
            seed: Some(42),
            ..WorkloadConfig::default()
        };
        let workload = Workload::generate(&config).expect("benchmark workload config is valid");
        let label = format!("dim={}_draws={}", dim, draws);

        group.bench_with_input(
            BenchmarkId::new("map_with_keys", &label),
            &workload,
            |b, w| b.iter(|| dot_by_map_keys(black_box(&w.map), black_box(&w.dense))),
        );

        group.bench_with_input(
            BenchmarkId::new("map_with_direct_traversal", &label),
            &workload,
            |b, w| b.iter(|| dot_by_map_traversal(black_box(&w.map), black_box(&w.dense))),
        );

        group.bench_with_input(
            BenchmarkId::new("double_array", &label),
            &workload,
            |b, w| b.iter(|| black_box(&w.sparse).dot(black_box(&w.dense))),
        );

        group.bench_with_input(
            BenchmarkId::new("double_array_including_construction", &label),
            &workload,
            |b, w| {
                b.iter(|| {
                    let sparse = SparseVector::from(black_box(&w.map).clone());
                    sparse.dot(black_box(&w.dense))
                })
            },
        );
    }

    group.finish();
}

fn benchmark_sparse_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("sparse_ops");

    let config = WorkloadConfig {
        seed: Some(7),
        ..WorkloadConfig::default()
    };
    let left = Workload::generate(&config).expect("benchmark workload config is valid");
    let right = Workload::generate(&WorkloadConfig {
        seed: Some(8),
        ..config.clone()
    })
    .expect("benchmark workload config is valid");

    group.bench_function("sdot", |b| {
        b.iter(|| black_box(&left.sparse).sdot(black_box(&right.sparse)))
    });

    group.bench_function("add_to", |b| {
        let mut dense = left.dense.clone();
        b.iter(|| {
            left.sparse.add_scaled_to(&mut dense, black_box(0.5));
        })
    });

    group.bench_function("l2", |b| b.iter(|| black_box(&left.sparse).l2()));

    group.finish();
}

criterion_group!(benches, benchmark_dot, benchmark_sparse_ops);
criterion_main!(benches);

// benches/scan.rs

use bitfield::Bitfield;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::prelude::*;

fn random_bitfield(len: usize, density: f64) -> Bitfield {
    let mut rng = StdRng::seed_from_u64(42);
    let mut b = Bitfield::new(len);
    for i in 0..len {
        if rng.random_bool(density) {
            b.set(i).unwrap();
        }
    }
    b
}

fn linear_first_set(b: &Bitfield, start: usize) -> Option<usize> {
    (start..b.len()).find(|&i| b.test(i).unwrap())
}

fn bench_count(c: &mut Criterion) {
    let sizes = vec![1_000, 100_000, 1_000_000];

    let mut group = c.benchmark_group("count");
    for size in sizes {
        let b = random_bitfield(size, 0.5);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| black_box(&b).count());
        });
    }
    group.finish();
}

fn bench_first_set_sparse(c: &mut Criterion) {
    let size = 100_000;
    let mut b = Bitfield::new(size);
    b.set(size - 1).unwrap();

    let mut group = c.benchmark_group("first_set_sparse");
    group.bench_function("byte_skip", |bench| {
        bench.iter(|| black_box(&b).first_set(0));
    });
    group.bench_function("linear", |bench| {
        bench.iter(|| linear_first_set(black_box(&b), 0));
    });
    group.finish();
}

fn bench_first_clear_dense(c: &mut Criterion) {
    let size = 100_000;
    let mut b = random_bitfield(size, 1.0);
    b.clear(size / 2).unwrap();

    let mut group = c.benchmark_group("first_clear_dense");
    group.bench_function("byte_skip", |bench| {
        bench.iter(|| black_box(&b).first_clear(0));
    });
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let size = 100_000;
    let mut rng = StdRng::seed_from_u64(7);
    let indices: Vec<usize> = (0..size).map(|_| rng.random_range(0..size)).collect();

    let mut group = c.benchmark_group("random_access");
    group.bench_function("set", |bench| {
        let mut b = Bitfield::new(size);
        bench.iter(|| {
            for &i in &indices {
                b.set(black_box(i)).unwrap();
            }
        });
    });
    group.bench_function("test", |bench| {
        let b = random_bitfield(size, 0.5);
        bench.iter(|| indices.iter().filter(|&&i| b.test(i).unwrap()).count());
    });
    group.finish();
}

criterion_group!(
    scan_benches,
    bench_count,
    bench_first_set_sparse,
    bench_first_clear_dense
);

criterion_group!(access_benches, bench_random_access);

criterion_main!(scan_benches, access_benches);

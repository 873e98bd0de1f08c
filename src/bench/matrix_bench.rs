//! Benchmarks for the matrix operation paths.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use densemat::Matrix;

fn square(size: usize, modulus: usize) -> Matrix<'static> {
    let data: Vec<f64> = (0..size * size).map(|i| (i % modulus) as f64).collect();
    Matrix::from_vec(data, size, size).unwrap()
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    for size in [64, 256, 512] {
        let a = square(size, 100);
        let b = square(size, 97);
        group.bench_with_input(BenchmarkId::new("right", size), &size, |bench, _| {
            bench.iter(|| black_box(&a).by_multiplying_right(black_box(&b)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("transposing_right", size), &size, |bench, _| {
            bench.iter(|| black_box(&a).by_transposing_and_multiplying_right(black_box(&b)).unwrap())
        });
    }
    group.finish();
}

fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");
    for size in [256, 1024] {
        let a = square(size, 100);
        let b = square(size, 97);
        group.bench_with_input(BenchmarkId::new("by_adding", size), &size, |bench, _| {
            bench.iter(|| black_box(&a).by_adding(black_box(&b)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("add_in_place", size), &size, |bench, _| {
            let mut x = a.clone();
            bench.iter(|| x.add(black_box(&b)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("transpose", size), &size, |bench, _| {
            bench.iter(|| black_box(&a).by_transposing())
        });
        group.bench_with_input(BenchmarkId::new("dot_with", size), &size, |bench, _| {
            bench.iter(|| black_box(&a).dot_with(black_box(&b)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_multiply, bench_elementwise);
criterion_main!(benches);

//! DataFrame construction, broadcasting and reduction benchmarks.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndframe::{Axis, DataFrame, NDFrame, Scalar, Series};

/// Rows of one integer, one float and one string column
fn generate_rows(count: usize) -> Vec<Vec<Scalar>> {
    (0..count)
        .map(|i| {
            vec![
                Scalar::Int(i as i64),
                Scalar::Float(i as f64 * 0.5),
                Scalar::Str(format!("val_{}", i)),
            ]
        })
        .collect()
}

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");

    for size in [10, 1_000, 10_000].iter() {
        let rows = generate_rows(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("from_rows", size), &rows, |b, rows| {
            b.iter(|| DataFrame::from_rows(std::hint::black_box(rows.clone())).unwrap())
        });

        let values: Vec<i32> = (0..*size as i32).collect();
        group.bench_with_input(BenchmarkId::new("series", size), &values, |b, values| {
            b.iter(|| Series::new(std::hint::black_box(values.clone())).unwrap())
        });
    }

    group.finish();
}

fn bench_broadcast(c: &mut Criterion) {
    let mut group = c.benchmark_group("broadcast");

    for size in [1_000, 10_000].iter() {
        let df = DataFrame::from_rows(generate_rows(*size)).unwrap();
        let per_row = Series::new((0..*size as i32).collect::<Vec<_>>()).unwrap();
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("scalar_add", size), &df, |b, df| {
            b.iter(|| df.add(1, Axis::Columns).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("series_mul_rows", size), &df, |b, df| {
            b.iter(|| df.mul(&per_row, Axis::Rows).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("frame_gt", size), &df, |b, df| {
            b.iter(|| df.gt(df, Axis::Columns).unwrap())
        });
    }

    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");

    for size in [1_000, 10_000].iter() {
        let df = DataFrame::from_rows(generate_rows(*size)).unwrap();

        group.bench_with_input(BenchmarkId::new("sum_columns", size), &df, |b, df| {
            b.iter(|| df.sum(Axis::Columns).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("mean_rows", size), &df, |b, df| {
            b.iter(|| df.mean(Axis::Rows).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("describe", size), &df, |b, df| {
            b.iter(|| df.describe().unwrap())
        });
        group.bench_with_input(BenchmarkId::new("sort_values", size), &df, |b, df| {
            b.iter(|| df.sort_values("1", false).unwrap())
        });
    }

    group.finish();
}

fn bench_tensor(c: &mut Criterion) {
    let df = DataFrame::from_rows(generate_rows(10_000))
        .unwrap()
        .select(&["0", "1"])
        .unwrap();
    c.bench_function("tensor_uncached", |b| {
        b.iter(|| df.copy().tensor().map(|t| t.sum()).unwrap())
    });
    c.bench_function("tensor_cached", |b| b.iter(|| df.tensor().map(|t| t.sum()).unwrap()));
}

fn bench_io(c: &mut Criterion) {
    let df = DataFrame::from_rows(generate_rows(1_000)).unwrap();
    let csv = df.to_csv().unwrap();
    let json = df.to_json().unwrap();

    c.bench_function("to_csv_1000", |b| b.iter(|| df.to_csv().unwrap()));
    c.bench_function("from_csv_1000", |b| b.iter(|| DataFrame::from_csv_str(&csv).unwrap()));
    c.bench_function("to_json_1000", |b| b.iter(|| df.to_json().unwrap()));
    c.bench_function("from_json_1000", |b| b.iter(|| DataFrame::from_json(&json).unwrap()));
}

criterion_group!(benches, bench_create, bench_broadcast, bench_reduce, bench_tensor, bench_io);
criterion_main!(benches);

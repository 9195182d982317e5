//! Benchmarks for chroma-rs conversions.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chroma_color::batch::convert_slice;
use chroma_color::{convert, grid, Space};
use chroma_spaces::{lab_to_xyz, linear_to_xyz, rgb_to_hsv, xyz_to_lab, xyz_to_linear};
use chroma_transfer::srgb;

/// Benchmark the scalar transfer function.
fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    for size in [1000, 10000, 100000].iter() {
        let values: Vec<f64> = (0..*size).map(|i| i as f64 / *size as f64).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("srgb_eotf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::eotf(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("srgb_oetf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::oetf(black_box(x))).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// Benchmark the per-edge triple transforms.
fn bench_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("edges");

    let rgb = [0.73, 0.42, 0.19];
    let xyz = linear_to_xyz(rgb);
    let lab = xyz_to_lab(xyz);

    group.bench_function("linear_to_xyz", |b| {
        b.iter(|| linear_to_xyz(black_box(rgb)))
    });
    group.bench_function("xyz_to_linear", |b| {
        b.iter(|| xyz_to_linear(black_box(xyz)))
    });
    group.bench_function("xyz_to_lab", |b| b.iter(|| xyz_to_lab(black_box(xyz))));
    group.bench_function("lab_to_xyz", |b| b.iter(|| lab_to_xyz(black_box(lab))));
    group.bench_function("rgb_to_hsv", |b| b.iter(|| rgb_to_hsv(black_box(rgb))));

    group.finish();
}

/// Benchmark routed full-chain conversions, scalar and batch.
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let rgb = [0.73, 0.42, 0.19];
    group.bench_function("srgb_to_lab_scalar", |b| {
        b.iter(|| convert(black_box(rgb), Space::Srgb, Space::Lab))
    });

    for res in [8, 16].iter() {
        let points = grid::unit_cube(*res);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("srgb_to_lab_batch", points.len()),
            &points,
            |b, p| b.iter(|| convert_slice(black_box(p), Space::Srgb, Space::Lab)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_transfer, bench_edges, bench_pipeline);
criterion_main!(benches);

#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmarks for the rasterization primitives.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use softraster::prelude::*;

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_line");

    for len in [16, 256, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, &len| {
            let mut fb = Framebuffer::new(2048, 2048).expect("non-zero dimensions");
            bench.iter(|| {
                draw_line(&mut fb, 0, 0, black_box(len), black_box(len / 3), Rgba::BLACK);
            });
        });
    }

    group.finish();
}

fn clipped_line_benchmark(c: &mut Criterion) {
    let mut fb = Framebuffer::new(512, 512).expect("non-zero dimensions");
    let clip = ClipRect::of_surface(512, 512);

    c.bench_function("draw_clipped_line/mostly_outside", |bench| {
        bench.iter(|| {
            draw_clipped_line(
                &mut fb,
                Segment::from_coords(black_box(-2000), -1500, 2500, 2000),
                clip,
                Rgba::BLACK,
            )
        });
    });
}

fn ellipse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_ellipse");

    for r in [16, 128, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(r), &r, |bench, &r| {
            let mut fb = Framebuffer::new(2048, 2048).expect("non-zero dimensions");
            bench.iter(|| {
                draw_ellipse(&mut fb, 1024, 1024, black_box(r), black_box(r / 2), Rgba::BLACK);
            });
        });
    }

    group.finish();
}

fn polygon_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_polygon");

    for size in [32, 256, 1024] {
        // A hexagon spanning `size` pixels.
        let polygon = Polygon::new(vec![
            Point::new(size / 4, 0),
            Point::new(3 * size / 4, 0),
            Point::new(size, size / 2),
            Point::new(3 * size / 4, size),
            Point::new(size / 4, size),
            Point::new(0, size / 2),
        ])
        .expect("six vertices");

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            let mut fb = Framebuffer::new(2048, 2048).expect("non-zero dimensions");
            bench.iter(|| fill_polygon(&mut fb, black_box(&polygon), Rgba::WHITE));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    line_benchmark,
    clipped_line_benchmark,
    ellipse_benchmark,
    polygon_benchmark
);
criterion_main!(benches);

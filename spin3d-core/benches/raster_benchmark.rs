//! Rasterizer and full-frame throughput
//!
//! Run with: `cargo bench --package spin3d-core`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spin3d_core::{ColorIndex, FrameBuffer, Mesh, Rasterizer, RenderConfig, Renderer, ScreenPoint};

fn bench_fill_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_triangle");
    let color = ColorIndex::new(4).unwrap_or_default();

    for size in [16, 64, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut fb = FrameBuffer::new(320, 240);
            let mut raster = Rasterizer::new();
            let (p0, p1, p2) = (
                ScreenPoint::new(10, 10),
                ScreenPoint::new(10 + size, 10 + size / 3),
                ScreenPoint::new(10 + size / 2, 10 + size),
            );
            b.iter(|| raster.fill_triangle(&mut fb, black_box(p0), black_box(p1), black_box(p2), color));
        });
    }

    group.finish();
}

fn bench_render_frame(c: &mut Criterion) {
    let config = RenderConfig::default();
    let mut renderer = match Renderer::new(Mesh::cube(2.0), &config) {
        Ok(renderer) => renderer,
        Err(err) => panic!("default config rejected: {err}"),
    };
    let mut fb = FrameBuffer::new(config.width, config.height);

    c.bench_function("render_frame_cube_320x240", |b| {
        b.iter(|| black_box(renderer.render_frame(&mut fb)));
    });
}

criterion_group!(benches, bench_fill_triangle, bench_render_frame);
criterion_main!(benches);

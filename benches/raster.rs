use criterion::{black_box, criterion_group, criterion_main, Criterion};
use softcanvas::rasterizer::{Color, Point, Surface};
use softcanvas::scene::Scene;
use softcanvas::DrawContext;

/// Benchmark: full-surface clear through the cached fill buffer
fn bench_clear_cached(c: &mut Criterion) {
    let mut surface = Surface::new(800, 600).unwrap();
    surface.set_clear_color(Color::new(0.4, 0.1, 0.05)).unwrap();
    // Prime the cache so the loop measures the steady-state bulk copy
    surface.clear().unwrap();

    c.bench_function("clear_800x600_cached", |b| {
        b.iter(|| {
            surface.clear().unwrap();
            black_box(surface.buffer[0])
        })
    });
}

/// Benchmark: scanline triangle fill covering a large area
fn bench_triangle_fill(c: &mut Criterion) {
    let mut surface = Surface::new(800, 600).unwrap();
    let color = Color::new(0.2, 0.4, 1.0).pack();

    c.bench_function("triangle_fill_large", |b| {
        b.iter(|| {
            surface.draw_filled_triangle(
                black_box(Point::new(400, 20)),
                black_box(Point::new(60, 560)),
                black_box(Point::new(740, 500)),
                color,
            );
            black_box(surface.buffer[0])
        })
    });
}

/// Benchmark: thick diagonal line (two triangles plus corner math)
fn bench_thick_line(c: &mut Criterion) {
    let mut surface = Surface::new(800, 600).unwrap();

    c.bench_function("thick_line_diagonal", |b| {
        b.iter(|| {
            surface.draw_thick_line(
                black_box(Point::new(50, 50)),
                black_box(Point::new(750, 550)),
                black_box(12),
                Color::WHITE,
            );
            black_box(surface.buffer[0])
        })
    });
}

/// Benchmark: a whole demo frame (clear + transformed scene)
fn bench_scene_frame(c: &mut Criterion) {
    let scene = Scene::default_scene();
    let mut ctx = DrawContext::new(800, 600).unwrap();
    ctx.surface.set_clear_color(scene.clear_color).unwrap();
    ctx.canvas.set_scale(1.5);
    ctx.canvas.translate(-40.0, 25.0);

    c.bench_function("scene_frame_800x600", |b| {
        b.iter(|| {
            ctx.surface.clear().unwrap();
            ctx.draw_lines(black_box(&scene.lines));
            black_box(ctx.surface.buffer[0])
        })
    });
}

criterion_group!(
    benches,
    bench_clear_cached,
    bench_triangle_fill,
    bench_thick_line,
    bench_scene_frame,
);

criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use soft_renderer::math::{fade, pack, Circle, Line, Point, Rect, Size, BLUE, RED};
use soft_renderer::{Flip, Image, RenderConfig, RenderContext};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

fn context(alpha_blending: bool) -> RenderContext {
    let config = RenderConfig {
        alpha_blending,
        ..Default::default()
    };
    RenderContext::with_display_size(&config, WIDTH, HEIGHT).expect("benchmark buffer")
}

/// Benchmark: single compositor write, opaque and blended
fn bench_set_pixel(c: &mut Criterion) {
    let mut ctx = context(true);
    let opaque = pack(RED);
    let translucent = pack(fade(BLUE, 0.5));

    c.bench_function("set_pixel_opaque", |b| {
        b.iter(|| ctx.set_pixel(black_box(100), black_box(100), black_box(opaque)))
    });

    c.bench_function("set_pixel_blend", |b| {
        b.iter(|| ctx.set_pixel(black_box(100), black_box(100), black_box(translucent)))
    });
}

/// Benchmark: full-screen clear through the compositor
fn bench_clear(c: &mut Criterion) {
    let mut ctx = context(true);

    c.bench_function("clear_buffer_color", |b| {
        b.iter(|| {
            ctx.clear_buffer();
            ctx.clear_buffer_color(black_box(BLUE));
        })
    });
}

/// Benchmark: rectangle fill at increasing sizes, blending on and off
fn bench_rectangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("rectangle_fill");

    for size in [16, 64, 256].iter() {
        for blend in [false, true] {
            let mut ctx = context(blend);
            let rect = Rect::new(Point::new(10, 10), Size::splat(*size));
            let color = if blend { fade(RED, 0.5) } else { RED };
            let label = if blend { "blend" } else { "opaque" };

            group.bench_with_input(BenchmarkId::new(label, size), size, |b, _| {
                b.iter(|| {
                    ctx.clear_buffer();
                    ctx.draw_rectangle(black_box(rect), color);
                })
            });
        }
    }

    group.finish();
}

/// Benchmark: circle fill and outline
fn bench_circle(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");

    for radius in [8, 32, 128].iter() {
        let circle = Circle::new(Point::new(320, 240), *radius);
        let mut ctx = context(true);

        group.bench_with_input(BenchmarkId::new("fill", radius), radius, |b, _| {
            b.iter(|| {
                ctx.clear_buffer();
                ctx.draw_circle(black_box(circle), RED);
            })
        });

        group.bench_with_input(BenchmarkId::new("outline", radius), radius, |b, _| {
            b.iter(|| {
                ctx.clear_buffer();
                ctx.draw_circle_lines(black_box(circle), RED);
            })
        });
    }

    group.finish();
}

/// Benchmark: lines and curves
fn bench_lines(c: &mut Criterion) {
    let mut ctx = context(true);
    let diagonal = Line::new(Point::ZERO, Point::new(WIDTH as i32 - 1, HEIGHT as i32 - 1));

    c.bench_function("line_diagonal", |b| {
        b.iter(|| {
            ctx.clear_buffer();
            ctx.draw_line(black_box(diagonal), RED);
        })
    });

    let mut group = c.benchmark_group("bezier");
    for resolution in [8u32, 32, 128].iter() {
        group.bench_with_input(BenchmarkId::new("resolution", resolution), resolution, |b, &n| {
            b.iter(|| {
                ctx.clear_buffer();
                ctx.draw_bezier(Point::new(0, 400), Point::new(639, 400), Point::new(320, 0), n, RED);
            })
        });
    }
    group.finish();
}

/// Benchmark: image blit with each flip mode
fn bench_image(c: &mut Criterion) {
    let side = 128u32;
    let bytes: Vec<u8> = (0..side * side)
        .flat_map(|i| [(i % 256) as u8, (i / 256 % 256) as u8, 128, 255])
        .collect();
    let image = Image::from_rgba(side, side, &bytes).expect("benchmark image");
    let mut ctx = context(true);

    let mut group = c.benchmark_group("image_blit");
    for flip in [Flip::None, Flip::Horizontal, Flip::Vertical, Flip::Both] {
        group.bench_function(format!("{:?}", flip), |b| {
            b.iter(|| {
                ctx.clear_buffer();
                ctx.draw_image_ex(black_box(&image), Point::new(320, 240), Point::splat(64), flip, RED);
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_set_pixel,
    bench_clear,
    bench_rectangle,
    bench_circle,
    bench_lines,
    bench_image,
);

criterion_main!(benches);

#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmarks for line rasterization, field coloring and full-scene redraws.

use std::f32::consts::TAU;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_grapher::prelude::*;

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_line");
    let mut fb = Framebuffer::new(1280, 720).expect("valid dimensions");

    let cases = [
        ("inside", Line::from_coords(10.0, 10.0, 1200.0, 700.0)),
        ("clipped", Line::from_coords(-500.0, -300.0, 2000.0, 1000.0)),
        ("outside", Line::from_coords(-500.0, -300.0, -10.0, -10.0)),
    ];
    for (name, line) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &line, |b, &line| {
            b.iter(|| draw_line(&mut fb.surface(), black_box(line), Rgba::WHITE));
        });
    }

    group.finish();
}

fn field_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("field");

    for (width, height) in [(128, 72), (640, 360), (1280, 720)] {
        let mut fb = Framebuffer::new(width, height).expect("valid dimensions");
        let plot = FieldPlot::new(|x, y| 5.0 * (0.1 * (x + y) as f32).sin())
            .colors(0xFFFF_7F00_u32, 0x0FFF_E900_u32);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &(width, height),
            |b, _| b.iter(|| plot.draw(&mut fb.surface())),
        );
    }

    group.finish();
}

fn surface_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parametric_surface");

    for divisions in [90u16, 180, 360] {
        let step = TAU / f32::from(divisions);
        let mut fb = Framebuffer::new(640, 360).expect("valid dimensions");
        let torus = ParametricSurfacePlot::new(|t, s| {
            let ring = 100.0 + 20.0 * t.cos();
            (320.0 + ring * s.cos(), 180.0 + ring * s.sin(), 20.0 * t.sin())
        })
        .t_range(ParamRange::new(0.0, TAU, step))
        .s_range(ParamRange::new(0.0, TAU, step));

        group.bench_with_input(BenchmarkId::from_parameter(divisions), &divisions, |b, _| {
            b.iter(|| torus.draw(&mut fb.surface()));
        });
    }

    group.finish();
}

fn compositor_benchmark(c: &mut Criterion) {
    let mut grapher = Grapher::new();
    grapher.add_field(FieldPlot::new(|x, y| (x ^ y) as f32));
    for i in 0..25 {
        let offset = 10.0 + i as f32 * 25.0;
        grapher.add_function(FunctionPlot::new(move |x| offset + 10.0 * (x as f32 * 0.05).sin()));
    }
    for i in 0..10 {
        let x0 = 100.0 + 100.0 * i as f32;
        grapher.add_equation(
            EquationPlot::new(move |t: f32| (x0 + 40.0 * t.sin(), 500.0 + 40.0 * t.cos()))
                .range(ParamRange::new(0.0, TAU + 0.1, TAU / (3.0 + i as f32)))
                .style(PlotStyle::Line),
        );
    }

    let mut fb = Framebuffer::new(1280, 720).expect("valid dimensions");
    c.bench_function("draw_all_scene", |b| {
        b.iter(|| {
            fb.clear(Rgba::from_packed(0x2828_2828));
            grapher.draw_all(&mut fb.surface());
        });
    });
}

criterion_group!(
    benches,
    line_benchmark,
    field_benchmark,
    surface_benchmark,
    compositor_benchmark
);
criterion_main!(benches);

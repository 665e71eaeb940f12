//! grapher-demo: render the reference scene to a PNG.
//!
//! Layers, back to front: a sine height field, a stack of horizontal lines,
//! vertical sine waves, two groups of circle polygons, three spheres and a
//! torus.

use std::f32::consts::{PI, TAU};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use trueno_grapher::color::Rgba;
use trueno_grapher::framebuffer::Framebuffer;
use trueno_grapher::grapher::Grapher;
use trueno_grapher::output::PngEncoder;
use trueno_grapher::plots::{
    Axis, EquationPlot, FieldPlot, FunctionPlot, ParametricSurfacePlot, PlotStyle,
};
use trueno_grapher::sampling::ParamRange;

#[derive(Parser, Debug)]
#[command(name = "grapher-demo")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Render the trueno-grapher demo scene to a PNG", long_about = None)]
struct Cli {
    /// Frame width in pixels
    #[arg(long, default_value = "1280")]
    width: u32,

    /// Frame height in pixels
    #[arg(long, default_value = "720")]
    height: u32,

    /// Background as packed hex 0xAARRGGBB
    #[arg(short, long, default_value = "0x28282828", value_parser = parse_packed)]
    background: u32,

    /// Output PNG path
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,
}

fn parse_packed(value: &str) -> Result<u32, String> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    u32::from_str_radix(&digits.replace('_', ""), 16)
        .map_err(|e| format!("invalid packed color '{value}': {e}"))
}

fn sine(x: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    a * (b * x + c).sin() + d
}

fn circle(x0: f32, y0: f32, r: f32) -> impl Fn(f32) -> (f32, f32) {
    move |t| (x0 + t.sin() * r, y0 + t.cos() * r)
}

fn sphere(r: f32, x0: f32, y0: f32) -> impl Fn(f32, f32) -> (f32, f32, f32) {
    move |t, s| {
        (
            x0 + r * t.sin() * s.cos(),
            y0 + r * t.sin() * s.sin(),
            r * t.cos(),
        )
    }
}

fn torus(major: f32, minor: f32, x0: f32, y0: f32) -> impl Fn(f32, f32) -> (f32, f32, f32) {
    move |t, s| {
        let ring = major + minor * t.cos();
        (x0 + ring * s.cos(), y0 + ring * s.sin(), minor * t.sin())
    }
}

fn build_scene(width: f32, height: f32) -> Grapher {
    // Slightly past a full turn so closed polygons get their last edge
    let turn_and_a_quarter = TAU + 0.5 * PI;
    let mut grapher = Grapher::new();

    grapher.add_field(
        FieldPlot::new(|x, y| sine((x + y) as f32, 5.0, 0.1, 0.0, 0.0))
            .colors(0xFFFF_7F00_u32, 0x0FFF_E900_u32),
    );

    for i in 0..25 {
        let i = i as f32;
        let offset = height - i * (i * 0.07) * 3.0;
        grapher.add_function(FunctionPlot::new(move |_| offset).color(0xFFFD_0000_u32));
    }

    for i in 0..7 {
        let i = i as f32;
        grapher.add_function(
            FunctionPlot::new(move |y| sine(y as f32, 10.0, 0.1, i, 15.0 + i * 30.0))
                .axis(Axis::Y)
                .style(PlotStyle::Line)
                .color(0xFFFF_D644_u32),
        );
    }

    for i in 0..10 {
        let i = i as f32;
        grapher.add_equation(
            EquationPlot::new(circle(width * 0.2 + 100.0 * i, height * 0.75 - 15.0 * i, 40.0))
                .range(ParamRange::new(0.0, turn_and_a_quarter, TAU / (3.0 + i)))
                .style(PlotStyle::Line)
                .color(0xFF23_D6FF_u32),
        );
    }

    for i in 0..9 {
        let i = i as f32;
        let angle = (i * 40.0).to_radians();
        grapher.add_equation(
            EquationPlot::new(circle(
                width * 0.7 + i * angle.cos() * 35.0,
                height * 0.4 + i * angle.sin() * 35.0,
                (i + 1.0) * 10.0,
            ))
            .range(ParamRange::new(0.0, turn_and_a_quarter, TAU / 3.0))
            .style(PlotStyle::Line)
            .color(0xFF88_FF84_u32),
        );
    }

    let fine = ParamRange::new(0.0, turn_and_a_quarter, TAU / 360.0);
    for i in 0..3 {
        let i = i as f32;
        grapher.add_parametric_surface(
            ParametricSurfacePlot::new(sphere(
                120.0 - i * 20.0,
                width * 0.15 + 150.0 * i,
                height * 0.15 + 30.0 * i,
            ))
            .t_range(fine)
            .s_range(fine)
            .colors(Rgba::BLACK, Rgba::WHITE),
        );
    }

    grapher.add_parametric_surface(
        ParametricSurfacePlot::new(torus(100.0, 20.0, width * 0.75, height * 0.75))
            .t_range(fine)
            .s_range(ParamRange::new(0.0, turn_and_a_quarter, TAU / 720.0))
            .colors(Rgba::BLACK, Rgba::WHITE),
    );

    grapher
}

fn main() -> trueno_grapher::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut fb = Framebuffer::new(cli.width, cli.height)?;
    fb.clear(Rgba::from_packed(cli.background));

    let grapher = build_scene(cli.width as f32, cli.height as f32);
    tracing::info!(plots = grapher.len(), width = cli.width, height = cli.height, "rendering scene");
    grapher.draw_all(&mut fb.surface());

    PngEncoder::write_to_file(&fb, &cli.output)?;
    tracing::info!(output = %cli.output.display(), "frame saved");
    Ok(())
}

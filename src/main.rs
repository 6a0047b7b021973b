// src/main.rs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};

use ray_raster::demo_scene::create_demo_scene;
use ray_raster::{FrameBuffers, RenderSettings, ScanPolicy, ShadeType};

/// Renders the built-in demo scene with the row ray-casting rasterizer and
/// writes the final frame as a binary PPM.
#[derive(Parser)]
#[command(name = "ray_raster_demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Screen width
    #[arg(short, long, default_value = "640")]
    width: u32,

    /// Screen height, HUD included
    #[arg(long, default_value = "480")]
    height: u32,

    /// Rows reserved for the HUD at the bottom of the screen
    #[arg(long, default_value = "0")]
    hud: u32,

    /// Depth shading model
    #[arg(short, long, value_enum, default_value = "quadratic")]
    shade: ShadeArg,

    /// Distance at which depth shading reaches full strength
    #[arg(long, default_value = "10.0")]
    fog: f32,

    /// Maximum depth-shade darkening per channel
    #[arg(long, default_value = "75")]
    threshold: i32,

    /// Draw flat colors even where texture coordinates exist
    #[arg(long)]
    no_textures: bool,

    /// Sweep every column of a row instead of stopping after the triangle's span
    #[arg(long)]
    full_scan: bool,

    /// Number of frames to render, turning the camera between frames
    #[arg(short, long, default_value = "1")]
    frames: u32,

    /// Camera turn per frame, in degrees
    #[arg(long, default_value = "2.0")]
    turn: f32,

    /// Output image
    #[arg(short, long, default_value = "frame.ppm")]
    output: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ShadeArg {
    /// No depth shading
    None,
    /// Darkening grows linearly up to the fog distance
    Linear,
    /// Parabolic falloff peaking at the fog distance
    Quadratic,
}

impl From<ShadeArg> for ShadeType {
    fn from(arg: ShadeArg) -> Self {
        match arg {
            ShadeArg::None => ShadeType::None,
            ShadeArg::Linear => ShadeType::Linear,
            ShadeArg::Quadratic => ShadeType::Quadratic,
        }
    }
}

fn write_ppm(path: &Path, buffers: &FrameBuffers) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write!(out, "P6\n{} {}\n255\n", buffers.width(), buffers.height())?;
    out.write_all(&buffers.to_rgb_bytes())?;
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let hud_height = cli.height.saturating_sub(cli.hud);
    let settings = RenderSettings::default()
        .with_screen(cli.width, cli.height)
        .with_hud_height(hud_height)
        .with_shade_type(cli.shade.into())
        .with_fog(cli.fog, cli.threshold)
        .with_textures(!cli.no_textures)
        .with_scan_policy(if cli.full_scan { ScanPolicy::FullScan } else { ScanPolicy::StopAfterSpan });
    settings.validate()?;

    let mut scene = create_demo_scene()?;
    let mut buffers = FrameBuffers::new(settings.width, settings.height)?;
    info!(
        "rendering {} frame(s) of {} triangles at {}x{}",
        cli.frames,
        scene.triangle_count(),
        settings.width,
        settings.height
    );

    let started = Instant::now();
    for frame in 0..cli.frames.max(1) {
        if frame > 0 {
            scene.camera.rotate(cli.turn.to_radians());
        }
        let stats = scene.render(&mut buffers, &settings)?;
        info!(
            "frame {frame}: {} pixels written, {} of {} rows stopped early",
            stats.drawn, stats.rows_stopped_early, stats.rows
        );
    }
    info!("rendered in {:.2?}", started.elapsed());

    write_ppm(&cli.output, &buffers)?;
    info!("wrote {}", cli.output.display());
    Ok(())
}

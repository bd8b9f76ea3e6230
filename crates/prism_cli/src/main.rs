use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use prism_core::{load_description, SceneDescription};
use prism_renderer::{build_camera, build_scene, render, render_serial, RenderConfig};

/// Render a scene description with the prism ray caster.
#[derive(Debug, Parser)]
#[command(name = "prism", author, version, about, long_about = None)]
struct Args {
    /// JSON scene description
    scene: PathBuf,

    /// Output image; the extension picks the format [default: from the scene]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the raster width
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Override the raster height
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,

    /// Number of render threads [default: one per core]
    #[arg(short, long)]
    threads: Option<usize>,

    /// Render on the calling thread only
    #[arg(long)]
    serial: bool,

    /// Reject rays that miss the scene bounds before testing primitives
    #[arg(long)]
    cull: bool,
}

impl Args {
    /// Apply command line overrides on top of the scene's render settings.
    fn apply(&self, description: &mut SceneDescription) {
        let render = &mut description.render;
        if let Some(width) = self.width {
            render.width = width;
        }
        if let Some(height) = self.height {
            render.height = height;
        }
        if let Some(output) = &self.output {
            render.output = output.clone();
        }
        if self.cull {
            render.bounds_culling = true;
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure render threads")?;
    }

    let mut description = load_description(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;
    args.apply(&mut description);

    let start = Instant::now();
    let scene = build_scene(&description).context("Failed to build scene")?;
    let camera = build_camera(&description);
    log::info!("Scene built in {:?}", start.elapsed());

    let config = RenderConfig::from(&description.render);
    log::info!(
        "Rendering {}x{} ({})",
        config.width,
        config.height,
        if args.serial {
            "serial".to_string()
        } else {
            format!("{} threads", rayon::current_num_threads())
        }
    );

    let start = Instant::now();
    let image = if args.serial {
        render_serial(&camera, &scene, &config)
    } else {
        render(&camera, &scene, &config)
    };
    log::info!("Rendered in {:?}", start.elapsed());

    let output = &description.render.output;
    image
        .save(output)
        .with_context(|| format!("Failed to save {}", output.display()))?;
    log::info!("Saved to {}", output.display());

    Ok(())
}

//! Speed Tracer - renders a sphere scene to a PNG.

mod cli;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use speed_core::SceneDescription;
use speed_renderer::{render, Camera, RenderConfig, Scene};

use cli::Args;

fn load_description(args: &Args, seed: u64) -> Result<SceneDescription> {
    match &args.scene {
        Some(path) => speed_core::load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display())),
        None => speed_core::preset(&args.preset, seed)
            .with_context(|| format!("Failed to build preset '{}'", args.preset)),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    log::info!("Starting Speed Tracer");
    let start = Instant::now();

    // The scene layout and the render share one seed so a run can be replayed
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Seed: {}", seed);
    let description = load_description(&args, seed)?;
    let world = Scene::from_description(&description)?;

    let mut camera = Camera::new(args.width, args.height).with_quality(args.samples, args.max_depth);
    let config = RenderConfig::default().with_workers(args.workers).with_seed(seed);

    let image = render(&mut camera, &world, &config)?;

    image::save_buffer(
        &args.output,
        &image.data,
        image.width,
        image.height,
        image::ColorType::Rgb8,
    )
    .with_context(|| format!("Failed to write {}", args.output.display()))?;

    log::info!("Saved {}", args.output.display());
    log::info!("Execution time: {} ms", start.elapsed().as_millis());

    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use lumen_renderer::{render, write_ppm, Camera, PixelBuffer, RenderError};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

mod cli;
mod logger;
mod scene;

use cli::Args;
use logger::init_logger;
use scene::demo_scene;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());
    run(args)
}

fn run(args: Args) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let config = args.render_config(seed);
    config.validate().context("Invalid render settings")?;

    // Open the output before rendering so a bad path fails fast
    let file = File::create(&args.output)
        .with_context(|| format!("Can't open {} for writing", args.output.display()))?;

    info!(
        "Image resolution: {}x{}, samples per pixel: {}, threads: {}, seed: {}",
        config.width, config.height, config.samples_per_pixel, config.threads, seed
    );

    let world = demo_scene();
    debug!("Scene has {} objects", world.len());
    let camera = Camera::new();

    let start = Instant::now();
    let rendered = render(&camera, &world, &config);
    save_or_discard(file, &args.output, rendered)?;

    info!("Saved to {} ({:?} total)", args.output.display(), start.elapsed());
    Ok(())
}

/// Write a finished image to `file`, or delete `path` if the render failed.
fn save_or_discard(
    file: File,
    path: &Path,
    rendered: Result<PixelBuffer, RenderError>,
) -> Result<()> {
    let image = match rendered {
        Ok(image) => image,
        Err(err) => {
            drop(file);
            if let Err(rm) = fs::remove_file(path) {
                warn!("Couldn't remove {}: {rm}", path.display());
            }
            return Err(err).context("Render failed");
        }
    };

    write_ppm(BufWriter::new(file), &image)
        .with_context(|| format!("Failed to write {}", path.display()))
}

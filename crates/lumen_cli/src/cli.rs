use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::{RenderConfig, MAX_DEPTH};
use std::path::PathBuf;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "Render a scene of spheres to a plain-text PPM image")]
pub struct Args {
    /// Output file (PPM, plain text)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Number of worker threads
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub threads: u32,

    /// Image width in pixels
    #[arg(long, default_value_t = 512)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 512)]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(short, long, default_value_t = 200)]
    pub samples: u32,

    /// Maximum number of bounces per path
    #[arg(long, default_value_t = MAX_DEPTH)]
    pub max_depth: u32,

    /// Seed for the sample generators (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Render settings for these arguments, using `seed` for the generators.
    pub fn render_config(&self, seed: u64) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            samples_per_pixel: self.samples,
            max_depth: self.max_depth,
            threads: self.threads,
            seed,
        }
    }
}

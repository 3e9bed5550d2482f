use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
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
#[command(name = "speed_tracer")]
#[command(about = "A CPU path tracer for spheres")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 1920)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 1080)]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 3)]
    pub samples: u32,

    /// Maximum bounces per path
    #[arg(long, default_value_t = 4)]
    pub max_depth: u32,

    /// Number of render workers
    #[arg(long, short = 'j', default_value_t = speed_renderer::DEFAULT_WORKERS)]
    pub workers: usize,

    /// Base random seed; drawn from entropy when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Built-in scene to render
    #[arg(long, default_value = "sample", value_parser = clap::builder::PossibleValuesParser::new(speed_core::PRESET_NAMES))]
    pub preset: String,

    /// JSON scene file (overrides --preset)
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

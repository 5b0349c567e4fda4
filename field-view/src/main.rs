//! Application entry point for the particle network viewer.
//!
//! By default this opens an eframe window and delegates all interaction and
//! drawing to [`Viewer`]. With `--headless` it instead drives the animator
//! against a recording surface and logs what each frame would draw.

mod headless;
mod logging;
mod surface;
mod viewer;

use clap::Parser;
use field_core::config::{ConfigError, FieldConfig};
use std::path::PathBuf;
use thiserror::Error;
use viewer::Viewer;

/// Interactive particle network animation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file overriding the default field configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Honour a reduced-motion preference: the animation never starts
    #[arg(long)]
    reduced_motion: bool,

    /// Fixed RNG seed for reproducible particle layouts
    #[arg(long)]
    seed: Option<u64>,

    /// Run without a window against a recording surface
    #[arg(long)]
    headless: bool,

    /// Number of frames to run in headless mode
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Headless surface width in pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Headless surface height in pixels
    #[arg(long, default_value_t = 720.0)]
    height: f32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum ViewError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("viewer window failed: {0}")]
    Window(#[from] eframe::Error),
}

fn load_config(args: &Args) -> Result<FieldConfig, ConfigError> {
    let mut cfg = match &args.config {
        Some(path) => FieldConfig::load(path)?,
        None => FieldConfig::default(),
    };
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    Ok(cfg)
}

fn main() -> Result<(), ViewError> {
    let args = Args::parse();
    logging::init(args.verbose);

    let cfg = load_config(&args)?;

    if args.headless {
        let opts = headless::HeadlessOptions::from(args);
        let report = headless::run(cfg, &opts);
        log::info!(
            "headless run finished: {} frames drawn, final state {:?}",
            report.frames_drawn,
            report.final_state
        );
        return Ok(());
    }

    let reduced_motion = args.reduced_motion;
    eframe::run_native(
        "Particle Network",
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(Viewer::new(cfg, reduced_motion)))),
    )?;
    Ok(())
}

impl From<Args> for headless::HeadlessOptions {
    fn from(args: Args) -> Self {
        Self {
            frames: args.frames,
            width: args.width,
            height: args.height,
            reduced_motion: args.reduced_motion,
        }
    }
}

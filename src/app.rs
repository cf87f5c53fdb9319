//! # Application Shell
//!
//! Command line handling, logging setup and exit status for the binaries.

use crate::driver::Driver;
use crate::lessons::{Lesson, SceneConfig};
use crate::platform::MacroquadPlatform;
use crate::BlitResult;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments shared by both programs.
///
/// Every flag is optional; without any the programs use their built-in
/// asset, color key and background.
#[derive(Parser, Debug, Default)]
#[command(version)]
pub struct Args {
    /// Image file to load instead of the built-in asset
    #[arg(long)]
    pub asset: Option<PathBuf>,

    /// JSON file overriding asset, color_key and background
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); falls back to RUST_LOG
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Resolves the scene for `lesson`: built-in defaults, then the config
    /// file, then `--asset`.
    pub fn scene(&self, lesson: Lesson) -> BlitResult<SceneConfig> {
        let mut scene = lesson.default_scene();
        if let Some(path) = &self.config {
            scene = SceneConfig::merge_file(scene, path)?;
        }
        if let Some(asset) = &self.asset {
            scene.asset = asset.clone();
        }
        Ok(scene)
    }
}

/// Initializes the logging system based on the specified log level.
pub fn initialize_logging(log_level: Option<&str>) {
    #[cfg(feature = "dev-tools")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = match log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        };
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
        if let Some(level) = log_level {
            builder.parse_filters(level);
        }
        let _ = builder.try_init();
    }
}

/// Entry point used by the binaries: runs `lesson` in the macroquad window
/// and exits the process with status 1 on any failure.
pub async fn run(lesson: Lesson) {
    let args = Args::parse();
    initialize_logging(args.log_level.as_deref());

    log::info!("Starting {} v{}", lesson.title(), crate::VERSION);

    if let Err(e) = run_with_args(lesson, &args).await {
        log::error!("{:?} failure: {}", e.kind(), e);
        std::process::exit(e.exit_code());
    }

    log::info!("Exiting");
}

async fn run_with_args(lesson: Lesson, args: &Args) -> BlitResult<()> {
    let scene = args.scene(lesson)?;
    let mut driver = Driver::new(lesson, scene, MacroquadPlatform::new());
    driver.execute().await?;
    Ok(())
}

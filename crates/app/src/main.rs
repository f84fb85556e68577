//! snipshot - region selection and capture driver
//!
//! Replays scripted pointer input against a frozen desktop: the selection
//! overlay runs headless, the committed region is cropped on a worker thread
//! and saved as PNG. A JSON summary goes to stdout.

mod config;
mod replay;
mod script;
mod state;
mod worker;

use crate::config::AppConfig;
use crate::script::Script;
use anyhow::{Context, Result};
use capture::{FrozenDesktop, Point};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snipshot")]
#[command(about = "Region selection and capture driver")]
struct Cli {
    /// JSON config file (selection policy, output directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a script against a desktop image
    Replay {
        /// Input script (JSON)
        #[arg(long)]
        script: PathBuf,
        /// Image standing in for the virtual desktop
        #[arg(long)]
        image: PathBuf,
        /// Virtual screen origin X of the image's top-left pixel
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        origin_x: i32,
        /// Virtual screen origin Y of the image's top-left pixel
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        origin_y: i32,
        /// Output file path
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Freeze the live virtual desktop and replay a script against it
    #[cfg(windows)]
    Desktop {
        /// Input script (JSON)
        #[arg(long)]
        script: PathBuf,
        /// Output file path
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("snipshot=info".parse()?)
                .add_directive("export=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    let summary = match cli.command {
        Commands::Replay { script, image, origin_x, origin_y, out } => {
            let script = Script::load(&script)?;
            let img = image::open(&image)
                .with_context(|| format!("opening desktop image {}", image.display()))?
                .to_rgba8();
            let desktop = FrozenDesktop::from_rgba_image(img, Point::new(origin_x, origin_y));
            replay::run(desktop, &script, &config, out)?
        }
        #[cfg(windows)]
        Commands::Desktop { script, out } => {
            let script = Script::load(&script)?;
            let desktop = capture::gdi::capture_virtual_desktop()
                .context("capturing virtual desktop")?;
            replay::run(desktop, &script, &config, out)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

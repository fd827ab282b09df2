use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vignette_core::{AppConfig, SceneKind};

mod commands;

#[derive(Parser)]
#[command(name = "vignette")]
#[command(author, version, about = "Animated terminal vignettes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive viewer
    Run {
        /// Scene to open first (cards, chat or fire)
        #[arg(short, long)]
        scene: Option<SceneKind>,
        /// Skip the dialogue download and use the built-in dataset
        #[arg(long)]
        offline: bool,
    },
    /// Step a scene without a terminal and print what happens
    Simulate {
        /// Scene to simulate (cards, chat or fire)
        #[arg(short, long, default_value = "cards")]
        scene: SceneKind,
        /// Number of frames to step
        #[arg(short, long, default_value_t = 600)]
        frames: u32,
        /// Simulated frame rate
        #[arg(long, default_value_t = 60)]
        fps: u32,
    },
    /// Fetch the dialogue and print it laid out
    Dialogue {
        /// Use the built-in dataset
        #[arg(long)]
        offline: bool,
        /// Override the maximum line width (scene units)
        #[arg(short, long)]
        width: Option<f64>,
    },
    /// Print the configuration path and effective settings
    Config {
        /// Write the effective settings to the configuration file
        #[arg(long)]
        save: bool,
    },
}

/// Send logs to a file while the terminal UI owns the screen, else to stderr
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if to_file {
        let log_path = config.log_path();
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&log_path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    let interactive = matches!(cli.command, None | Some(Commands::Run { .. }));
    init_logging(&config, interactive)?;

    // Handle commands
    match cli.command {
        Some(Commands::Run { scene, offline }) => commands::run::run(config, scene, offline).await,
        None => commands::run::run(config, None, false).await,
        Some(Commands::Simulate { scene, frames, fps }) => {
            commands::simulate::run(config, scene, frames, fps)
        }
        Some(Commands::Dialogue { offline, width }) => {
            commands::dialogue::run(&config, offline, width).await
        }
        Some(Commands::Config { save }) => commands::config::run(&config, save),
    }
}

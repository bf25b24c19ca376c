//! Wits, the weed information tracking system.
//!
//! A terminal catalogue for cannabis strain records with an in-memory or
//! YAML-file backed store.

mod config;
mod errors;
mod models;
mod service;
mod store;
mod tui;

#[cfg(test)]
mod tests;

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, StorageMode};
use service::StrainService;
use tui::App;

/// Command line options; each one overrides its environment variable.
#[derive(Parser, Debug)]
#[command(name = "wits", version, about = "Terminal catalogue for cannabis strains")]
struct Cli {
    /// Storage backend: "in-memory" or "yml-file"
    #[arg(long, value_parser = StorageMode::parse)]
    storage_mode: Option<StorageMode>,

    /// Base directory for the strain file and logs
    #[arg(long)]
    wits_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env()?;
    config.apply_overrides(cli.storage_mode, cli.wits_dir);

    // The terminal belongs to the UI, so logs go to a file
    fs::create_dir_all(&config.wits_dir)?;
    fs::create_dir_all(config.log_dir_path())?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(log_file))
                .with_ansi(false),
        )
        .init();

    tracing::info!("Starting Wits {}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Storage mode: {}", config.storage_mode.as_str());
    tracing::info!("Wits directory: {:?}", config.wits_dir);

    // Initialize store and service
    let store = store::open_store(&config)?;
    let service = StrainService::new(store);

    let mut app = App::new(service);
    tui::run(&mut app)?;

    tracing::info!("Wits exited");
    Ok(())
}

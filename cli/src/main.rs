//! ParkIt operator console
//!
//! ```sh
//! # Run with default config (~/.config/parkit/config.toml)
//! parkit
//!
//! # Custom config path
//! parkit --config /etc/parkit/config.toml
//!
//! # Throwaway session without a database file
//! parkit --memory
//!
//! # Validate config without starting
//! parkit --check
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use parkit::app::{init_tracing, AppHandle, AppOptions};
use parkit::config::{AppConfig, StorageBackend};
use parkit::infrastructure::TerminalConsole;

/// ParkIt: parking lot entry and exit terminal.
#[derive(Parser, Debug)]
#[command(
    name = "parkit",
    version,
    about = "Parking lot operator console",
    long_about = "ParkIt operator console: allocates parking spots to arriving \
                  vehicles and charges the fare when they leave.\n\n\
                  Default config: ~/.config/parkit/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "PARKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override the SQLite database file.
    #[arg(long)]
    database: Option<String>,

    /// Keep everything in memory instead of SQLite.
    #[arg(long)]
    memory: bool,

    /// Validate the configuration file and exit without starting.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(parkit::default_config_path);

    let loaded = AppConfig::load(&config_path);
    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config);

    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    if let Some(path) = cli.database {
        info!("CLI override: database = {}", path);
        config.database.path = path;
        config.database.backend = StorageBackend::Sqlite;
    }
    if cli.memory {
        info!("CLI override: in-memory storage");
        config.database.backend = StorageBackend::Memory;
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Database    : {}", config.database.connection_url());
        println!(
            "   Lot layout  : {} car, {} bike",
            config.lot.car_spots, config.lot.bike_spots
        );
        println!(
            "   Fares       : car {}/h, bike {}/h, recurring discount {}",
            config.fare.car_rate_per_hour,
            config.fare.bike_rate_per_hour,
            config.fare.recurring_discount
        );
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start ──────────────────────────────────────────────────
    let opts = AppOptions {
        config,
        auto_migrate: !cli.no_migrate,
    };

    let handle = match AppHandle::start(opts, Arc::new(TerminalConsole::stdio())).await {
        Ok(h) => h,
        Err(e) => {
            error!("Failed to start parking system: {}", e);
            return Err(e.into());
        }
    };

    handle.run().await;
    handle.shutdown().await;
    Ok(())
}

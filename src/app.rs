//! Application runtime.
//!
//! Provides [`AppHandle`] that wires configuration, storage, the lot layout,
//! the parking workflow and the operator shell together, plus
//! [`init_tracing`] for the binary.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{info, warn};

use crate::application::{seed_lot_layout, OperatorConsole, ParkingService};
use crate::config::{AppConfig, StorageBackend};
use crate::domain::{FareCalculator, FareRates, RepositoryProvider};
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::{
    init_database, DatabaseConfig, InMemoryRepositoryProvider, SeaOrmRepositoryProvider,
};
use crate::interfaces::InteractiveShell;
use crate::shared::errors::{AppError, InfraError};

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the parking system.
pub struct AppOptions {
    /// Application configuration.
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
        }
    }
}

// ── AppHandle ──────────────────────────────────────────────────────

/// Handle to a started parking system.
pub struct AppHandle {
    /// Repository provider for data access.
    pub repos: Arc<dyn RepositoryProvider>,
    /// Entry/exit workflow.
    pub service: Arc<ParkingService>,
    /// The configuration the system was started with.
    pub config: AppConfig,

    console: Arc<dyn OperatorConsole>,
    db: Option<DatabaseConnection>,
}

impl AppHandle {
    /// Start the parking system with the given options.
    ///
    /// This will:
    /// 1. Open the configured store (SQLite with migrations, or in-memory)
    /// 2. Seed the lot layout when the store has no spots
    /// 3. Build the parking workflow on top of `console`
    pub async fn start(
        opts: AppOptions,
        console: Arc<dyn OperatorConsole>,
    ) -> Result<Self, AppError> {
        let config = opts.config;

        info!("Starting ParkIt parking system...");

        let (repos, db): (Arc<dyn RepositoryProvider>, Option<DatabaseConnection>) =
            match config.database.backend {
                StorageBackend::Memory => {
                    info!("Using in-memory storage, nothing will be persisted");
                    let repos: Arc<dyn RepositoryProvider> =
                        Arc::new(InMemoryRepositoryProvider::new());
                    (repos, None)
                }
                StorageBackend::Sqlite => {
                    let db_config = DatabaseConfig {
                        url: config.database.connection_url(),
                    };
                    let db = init_database(&db_config).await.map_err(InfraError::from)?;

                    if opts.auto_migrate {
                        info!("Running database migrations...");
                        Migrator::up(&db, None).await.map_err(InfraError::from)?;
                        info!("Migrations completed");
                    }

                    let repos: Arc<dyn RepositoryProvider> =
                        Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
                    (repos, Some(db))
                }
            };

        let created =
            seed_lot_layout(repos.as_ref(), config.lot.car_spots, config.lot.bike_spots).await?;
        if created > 0 {
            info!(spots = created, "Seeded parking lot");
        }

        let rates = FareRates::from(&config.fare);
        info!(
            car_rate_per_hour = %rates.car_rate_per_hour,
            bike_rate_per_hour = %rates.bike_rate_per_hour,
            recurring_discount = %rates.recurring_discount,
            free_minutes = rates.free_minutes,
            "Fare rates configured"
        );

        let service = Arc::new(ParkingService::new(
            repos.clone(),
            console.clone(),
            FareCalculator::new(rates),
        ));

        Ok(Self {
            repos,
            service,
            config,
            console,
            db,
        })
    }

    /// Run the operator shell until shutdown is chosen or input ends.
    pub async fn run(&self) {
        InteractiveShell::new(self.service.clone(), self.console.clone())
            .run()
            .await;
    }

    /// Close the database connection, if any.
    pub async fn shutdown(self) {
        if let Some(db) = self.db {
            if let Err(e) = db.close().await {
                warn!("Error closing database connection: {}", e);
            } else {
                info!("Database connection closed");
            }
        }
        info!("ParkIt parking system shutdown complete");
    }
}

/// Initialise the global tracing subscriber from the logging config.
///
/// `RUST_LOG` takes precedence over `logging.level`.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    // logs go to stderr so they do not interleave with the operator prompts
    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

//! Configuration module
//!
//! Application settings are read from a TOML file
//! (`~/.config/parkit/config.toml` by default). Every section and key is
//! optional; missing values fall back to the defaults below.
//!
//! ```toml
//! [logging]
//! level = "info"
//! format = "text"   # or "json"
//!
//! [database]
//! backend = "sqlite" # or "memory"
//! path = "./parkit.db"
//!
//! [lot]
//! car_spots = 3
//! bike_spots = 2
//!
//! [fare]
//! car_rate_per_hour = "1.5"
//! bike_rate_per_hour = "1.0"
//! recurring_discount = "0.05"
//! free_minutes = 0  # stays up to this many minutes are free
//! ```

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::FareRates;
use crate::shared::errors::InfraError;

/// Default location of the configuration file
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("parkit")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub database: DatabaseSettings,
    pub lot: LotConfig,
    pub fare: FareConfig,
}

impl AppConfig {
    /// Load configuration from `path`.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is
    /// an error.
    pub fn load(path: &Path) -> Result<Self, InfraError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, InfraError> {
        Ok(toml::from_str(raw)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// tracing filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub backend: StorageBackend,
    /// SQLite file path, created on first start
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sqlite,
            path: "./parkit.db".to_string(),
        }
    }
}

impl DatabaseSettings {
    pub fn connection_url(&self) -> String {
        match self.backend {
            StorageBackend::Sqlite => format!("sqlite://{}?mode=rwc", self.path),
            StorageBackend::Memory => "memory (not persisted)".to_string(),
        }
    }
}

/// Spots created when the store is empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotConfig {
    pub car_spots: u32,
    pub bike_spots: u32,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            car_spots: 3,
            bike_spots: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FareConfig {
    pub car_rate_per_hour: Decimal,
    pub bike_rate_per_hour: Decimal,
    pub recurring_discount: Decimal,
    pub free_minutes: i64,
}

impl Default for FareConfig {
    fn default() -> Self {
        let rates = FareRates::default();
        Self {
            car_rate_per_hour: rates.car_rate_per_hour,
            bike_rate_per_hour: rates.bike_rate_per_hour,
            recurring_discount: rates.recurring_discount,
            free_minutes: rates.free_minutes,
        }
    }
}

impl From<&FareConfig> for FareRates {
    fn from(cfg: &FareConfig) -> Self {
        Self {
            car_rate_per_hour: cfg.car_rate_per_hour,
            bike_rate_per_hour: cfg.bike_rate_per_hour,
            recurring_discount: cfg.recurring_discount,
            free_minutes: cfg.free_minutes,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.lot.car_spots, 3);
        assert_eq!(cfg.lot.bike_spots, 2);
        assert_eq!(cfg.fare.free_minutes, 0);
        assert_eq!(FareRates::from(&cfg.fare), FareRates::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let cfg = AppConfig::from_toml(
            r#"
            [database]
            backend = "memory"

            [lot]
            bike_spots = 5

            [fare]
            car_rate_per_hour = "2.5"
            free_minutes = 15
            "#,
        )
        .unwrap();

        assert_eq!(cfg.database.backend, StorageBackend::Memory);
        assert_eq!(cfg.database.path, "./parkit.db");
        assert_eq!(cfg.lot.car_spots, 3);
        assert_eq!(cfg.lot.bike_spots, 5);
        assert_eq!(cfg.fare.car_rate_per_hour, Decimal::new(25, 1));
        assert_eq!(cfg.fare.bike_rate_per_hour, Decimal::ONE);
        assert_eq!(cfg.fare.free_minutes, 15);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(AppConfig::from_toml("[lot]\ncar_spots = \"many\"").is_err());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let path = Path::new("/nonexistent/parkit/config.toml");
        assert_eq!(AppConfig::load(path).unwrap(), AppConfig::default());
    }

    #[test]
    fn sqlite_connection_url() {
        let settings = DatabaseSettings {
            backend: StorageBackend::Sqlite,
            path: "/var/lib/parkit/lot.db".to_string(),
        };
        assert_eq!(
            settings.connection_url(),
            "sqlite:///var/lib/parkit/lot.db?mode=rwc"
        );
    }
}

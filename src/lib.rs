//! # ParkIt Parking System
//!
//! Single-site parking lot: vehicles enter, are assigned a spot, accrue a
//! duration-based fare and leave after paying.
//!
//! ## Architecture
//!
//! - **domain**: Spots, tickets, fare rules and repository traits
//! - **application**: Entry/exit workflow and lot seeding
//! - **infrastructure**: SQLite and in-memory storage, terminal console
//! - **interfaces**: Operator menu shell
//! - **app**: Startup wiring and logging setup

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use app::{init_tracing, AppHandle, AppOptions};
pub use config::{default_config_path, AppConfig};

// Re-export storage types for easy access
pub use infrastructure::{
    init_database, DatabaseConfig, InMemoryRepositoryProvider, SeaOrmRepositoryProvider,
};

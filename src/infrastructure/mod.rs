//! Infrastructure layer - external concerns

pub mod console;
pub mod database;
pub mod storage;

pub use console::TerminalConsole;
pub use database::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
pub use storage::InMemoryRepositoryProvider;

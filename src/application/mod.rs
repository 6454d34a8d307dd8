pub mod ports;
pub mod services;

// Re-export key types for convenience
pub use ports::OperatorConsole;
pub use services::{seed_lot_layout, ParkingReceipt, ParkingService};

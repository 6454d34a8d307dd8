pub mod lot;
pub mod parking;

pub use lot::seed_lot_layout;
pub use parking::{ParkingReceipt, ParkingService};

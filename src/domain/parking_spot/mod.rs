//! Parking spot aggregate
//!
//! Contains the ParkingSpot entity, the vehicle type it accepts, and the
//! repository interface.

pub mod model;
pub mod repository;

pub use model::{ParkingSpot, ParkingType};
pub use repository::ParkingSpotRepository;

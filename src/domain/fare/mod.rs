//! Fare rules
//!
//! Hourly rates per vehicle type and the recurring-user discount.

pub mod model;

pub use model::{format_price, FareCalculator, FareRates};

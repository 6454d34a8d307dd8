//! SeaORM entities

pub mod parking;
pub mod ticket;

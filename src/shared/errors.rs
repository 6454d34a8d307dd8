use thiserror::Error;

use crate::domain::ParkingType;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("No {0} spot is available")]
    NoSpotAvailable(ParkingType),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn ticket_not_found(vehicle_reg_number: &str) -> Self {
        Self::NotFound {
            entity: "Ticket",
            field: "vehicle_reg_number",
            value: vehicle_reg_number.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}

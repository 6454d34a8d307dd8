//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{ParkingSpotRepository, RepositoryProvider, TicketRepository};

use super::parking_spot_repository::SeaOrmParkingSpotRepository;
use super::ticket_repository::SeaOrmTicketRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    parking_spots: SeaOrmParkingSpotRepository,
    tickets: SeaOrmTicketRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            parking_spots: SeaOrmParkingSpotRepository::new(db.clone()),
            tickets: SeaOrmTicketRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn parking_spots(&self) -> &dyn ParkingSpotRepository {
        &self.parking_spots
    }

    fn tickets(&self) -> &dyn TicketRepository {
        &self.tickets
    }
}

//! Parking spot repository interface

use async_trait::async_trait;

use super::model::{ParkingSpot, ParkingType};
use crate::domain::DomainResult;

#[async_trait]
pub trait ParkingSpotRepository: Send + Sync {
    /// Lowest-numbered available spot accepting `parking_type`, if any.
    async fn get_next_available_slot(&self, parking_type: ParkingType)
        -> DomainResult<Option<i32>>;
    /// Persist the availability flag of an existing spot.
    async fn update_parking(&self, spot: &ParkingSpot) -> DomainResult<()>;
    async fn save(&self, spot: ParkingSpot) -> DomainResult<()>;
    async fn find_all(&self) -> DomainResult<Vec<ParkingSpot>>;
}

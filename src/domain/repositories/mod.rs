//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to the spot and ticket repositories
//! - `DomainResult` — standard result type for domain operations

use super::parking_spot::ParkingSpotRepository;
use super::ticket::TicketRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let slot = repos.parking_spots().get_next_available_slot(ParkingType::Car).await?;
///     let ticket = repos.tickets().get_ticket("ABCDEF").await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn parking_spots(&self) -> &dyn ParkingSpotRepository;
    fn tickets(&self) -> &dyn TicketRepository;
}

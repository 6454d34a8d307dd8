//! Ticket repository interface

use async_trait::async_trait;

use super::model::Ticket;
use crate::domain::DomainResult;

#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Open ticket (no out time) held by `vehicle_reg_number`, if any.
    async fn get_ticket(&self, vehicle_reg_number: &str) -> DomainResult<Option<Ticket>>;
    async fn save_ticket(&self, ticket: Ticket) -> DomainResult<()>;
    /// Persist the out time and price of an existing ticket.
    async fn update_ticket(&self, ticket: &Ticket) -> DomainResult<()>;
    /// Number of completed tickets recorded for `vehicle_reg_number`.
    async fn get_nb_ticket(&self, vehicle_reg_number: &str) -> DomainResult<u32>;
    async fn next_id(&self) -> i32;
}

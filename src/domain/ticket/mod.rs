//! Ticket aggregate
//!
//! Contains the Ticket entity and repository interface.

pub mod model;
pub mod repository;

pub use model::Ticket;
pub use repository::TicketRepository;

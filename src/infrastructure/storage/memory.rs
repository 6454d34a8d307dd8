//! In-memory storage implementation

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    DomainError, DomainResult, ParkingSpot, ParkingSpotRepository, ParkingType,
    RepositoryProvider, Ticket, TicketRepository,
};

/// In-memory parking spots for development and testing
#[derive(Default)]
pub struct InMemoryParkingSpotRepository {
    spots: DashMap<i32, ParkingSpot>,
}

#[async_trait]
impl ParkingSpotRepository for InMemoryParkingSpotRepository {
    async fn get_next_available_slot(
        &self,
        parking_type: ParkingType,
    ) -> DomainResult<Option<i32>> {
        Ok(self
            .spots
            .iter()
            .filter(|s| s.parking_type == parking_type && s.available)
            .map(|s| s.id)
            .min())
    }

    async fn update_parking(&self, spot: &ParkingSpot) -> DomainResult<()> {
        match self.spots.get_mut(&spot.id) {
            Some(mut stored) => {
                stored.available = spot.available;
                Ok(())
            }
            None => Err(DomainError::NotFound {
                entity: "ParkingSpot",
                field: "id",
                value: spot.id.to_string(),
            }),
        }
    }

    async fn save(&self, spot: ParkingSpot) -> DomainResult<()> {
        if self.spots.contains_key(&spot.id) {
            return Err(DomainError::Validation(format!(
                "Parking spot {} already exists",
                spot.id
            )));
        }
        self.spots.insert(spot.id, spot);
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<ParkingSpot>> {
        let mut spots: Vec<_> = self.spots.iter().map(|e| e.value().clone()).collect();
        spots.sort_by_key(|s| s.id);
        Ok(spots)
    }
}

/// In-memory tickets for development and testing
pub struct InMemoryTicketRepository {
    tickets: DashMap<i32, Ticket>,
    ticket_counter: AtomicI32,
}

impl Default for InMemoryTicketRepository {
    fn default() -> Self {
        Self {
            tickets: DashMap::new(),
            ticket_counter: AtomicI32::new(1),
        }
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn get_ticket(&self, vehicle_reg_number: &str) -> DomainResult<Option<Ticket>> {
        Ok(self
            .tickets
            .iter()
            .filter(|t| t.vehicle_reg_number == vehicle_reg_number && t.is_active())
            .max_by_key(|t| t.in_time)
            .map(|t| t.clone()))
    }

    async fn save_ticket(&self, ticket: Ticket) -> DomainResult<()> {
        if self.tickets.contains_key(&ticket.id) {
            return Err(DomainError::Validation(format!(
                "Ticket {} already exists",
                ticket.id
            )));
        }
        self.tickets.insert(ticket.id, ticket);
        Ok(())
    }

    async fn update_ticket(&self, ticket: &Ticket) -> DomainResult<()> {
        match self.tickets.get_mut(&ticket.id) {
            Some(mut stored) => {
                stored.out_time = ticket.out_time;
                stored.price = ticket.price;
                Ok(())
            }
            None => Err(DomainError::NotFound {
                entity: "Ticket",
                field: "id",
                value: ticket.id.to_string(),
            }),
        }
    }

    async fn get_nb_ticket(&self, vehicle_reg_number: &str) -> DomainResult<u32> {
        Ok(self
            .tickets
            .iter()
            .filter(|t| t.vehicle_reg_number == vehicle_reg_number && !t.is_active())
            .count() as u32)
    }

    async fn next_id(&self) -> i32 {
        self.ticket_counter.fetch_add(1, Ordering::SeqCst)
    }
}

/// Repository provider holding everything in process memory
#[derive(Default)]
pub struct InMemoryRepositoryProvider {
    parking_spots: InMemoryParkingSpotRepository,
    tickets: InMemoryTicketRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spots(spots: impl IntoIterator<Item = ParkingSpot>) -> Self {
        let provider = Self::new();
        for spot in spots {
            provider.parking_spots.spots.insert(spot.id, spot);
        }
        provider
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn parking_spots(&self) -> &dyn ParkingSpotRepository {
        &self.parking_spots
    }

    fn tickets(&self) -> &dyn TicketRepository {
        &self.tickets
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;

    use super::*;

    fn lot() -> InMemoryRepositoryProvider {
        InMemoryRepositoryProvider::with_spots([
            ParkingSpot::new(1, ParkingType::Car, true),
            ParkingSpot::new(2, ParkingType::Car, true),
            ParkingSpot::new(3, ParkingType::Bike, true),
        ])
    }

    #[tokio::test]
    async fn next_slot_is_lowest_available_of_type() {
        let repos = lot();
        let spots = repos.parking_spots();

        assert_eq!(spots.get_next_available_slot(ParkingType::Car).await.unwrap(), Some(1));
        spots
            .update_parking(&ParkingSpot::new(1, ParkingType::Car, false))
            .await
            .unwrap();
        assert_eq!(spots.get_next_available_slot(ParkingType::Car).await.unwrap(), Some(2));
        assert_eq!(spots.get_next_available_slot(ParkingType::Bike).await.unwrap(), Some(3));
    }

    #[tokio::test]
    async fn full_lot_has_no_slot() {
        let repos = lot();
        repos
            .parking_spots()
            .update_parking(&ParkingSpot::new(3, ParkingType::Bike, false))
            .await
            .unwrap();
        assert_eq!(
            repos
                .parking_spots()
                .get_next_available_slot(ParkingType::Bike)
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn updating_unknown_spot_fails() {
        let repos = lot();
        let result = repos
            .parking_spots()
            .update_parking(&ParkingSpot::new(99, ParkingType::Car, false))
            .await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn open_ticket_lookup_and_completed_count() {
        let repos = lot();
        let tickets = repos.tickets();
        let spot = ParkingSpot::new(1, ParkingType::Car, false);

        let mut earlier = Ticket::new(tickets.next_id().await, spot.clone(), "ABCDEF");
        earlier.in_time = Utc::now() - Duration::days(1);
        earlier.out_time = Some(earlier.in_time + Duration::hours(2));
        earlier.price = Decimal::from(3);
        tickets.save_ticket(earlier.clone()).await.unwrap();

        assert!(tickets.get_ticket("ABCDEF").await.unwrap().is_none());
        assert_eq!(tickets.get_nb_ticket("ABCDEF").await.unwrap(), 1);

        let current = Ticket::new(tickets.next_id().await, spot, "ABCDEF");
        tickets.save_ticket(current.clone()).await.unwrap();

        let open = tickets.get_ticket("ABCDEF").await.unwrap().unwrap();
        assert_eq!(open.id, current.id);
        assert_eq!(tickets.get_nb_ticket("ABCDEF").await.unwrap(), 1);
        assert_eq!(tickets.get_nb_ticket("OTHER").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_ticket_records_exit() {
        let repos = lot();
        let tickets = repos.tickets();
        let mut ticket = Ticket::new(
            tickets.next_id().await,
            ParkingSpot::new(2, ParkingType::Car, false),
            "XYZ",
        );
        tickets.save_ticket(ticket.clone()).await.unwrap();

        ticket.out_time = Some(Utc::now());
        ticket.price = Decimal::new(15, 1);
        tickets.update_ticket(&ticket).await.unwrap();

        assert!(tickets.get_ticket("XYZ").await.unwrap().is_none());
        assert_eq!(tickets.get_nb_ticket("XYZ").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn ticket_ids_are_unique() {
        let repos = lot();
        let a = repos.tickets().next_id().await;
        let b = repos.tickets().next_id().await;
        assert_ne!(a, b);

        let ticket = Ticket::new(a, ParkingSpot::new(1, ParkingType::Car, false), "A");
        repos.tickets().save_ticket(ticket.clone()).await.unwrap();
        assert!(repos.tickets().save_ticket(ticket).await.is_err());
    }
}

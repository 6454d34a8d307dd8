//! Ticket domain entity

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::domain::ParkingSpot;

/// One vehicle's stay, from entry to exit
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub parking_spot: ParkingSpot,
    pub vehicle_reg_number: String,
    /// Fare owed; zero until the vehicle exits
    pub price: Decimal,
    pub in_time: DateTime<Utc>,
    pub out_time: Option<DateTime<Utc>>,
}

impl Ticket {
    pub fn new(id: i32, parking_spot: ParkingSpot, vehicle_reg_number: impl Into<String>) -> Self {
        Self {
            id,
            parking_spot,
            vehicle_reg_number: vehicle_reg_number.into(),
            price: Decimal::ZERO,
            in_time: Utc::now(),
            out_time: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.out_time.is_none()
    }

    /// Length of the stay, once the vehicle has left
    pub fn duration(&self) -> Option<Duration> {
        self.out_time.map(|out| out - self.in_time)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParkingType;

    fn sample_ticket() -> Ticket {
        Ticket::new(1, ParkingSpot::new(1, ParkingType::Car, false), "ABCDEF")
    }

    #[test]
    fn new_ticket_is_active_and_free() {
        let ticket = sample_ticket();
        assert!(ticket.is_active());
        assert_eq!(ticket.price, Decimal::ZERO);
        assert!(ticket.duration().is_none());
        assert_eq!(ticket.vehicle_reg_number, "ABCDEF");
    }

    #[test]
    fn duration_measured_from_in_time() {
        let mut ticket = sample_ticket();
        ticket.out_time = Some(ticket.in_time + Duration::minutes(90));
        assert!(!ticket.is_active());
        assert_eq!(ticket.duration(), Some(Duration::minutes(90)));
    }
}

//! Fare calculation

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{DomainError, DomainResult, ParkingType, Ticket};

/// Hourly rates and discount applied at exit
#[derive(Debug, Clone, PartialEq)]
pub struct FareRates {
    pub car_rate_per_hour: Decimal,
    pub bike_rate_per_hour: Decimal,
    /// Fraction taken off for recurring users (0.05 = 5%)
    pub recurring_discount: Decimal,
    /// Stays up to this many minutes are not charged, 0 disables
    pub free_minutes: i64,
}

impl Default for FareRates {
    fn default() -> Self {
        Self {
            car_rate_per_hour: Decimal::new(15, 1),
            bike_rate_per_hour: Decimal::ONE,
            recurring_discount: Decimal::new(5, 2),
            free_minutes: 0,
        }
    }
}

/// Computes the price of a completed ticket
#[derive(Debug, Clone, Default)]
pub struct FareCalculator {
    rates: FareRates,
}

impl FareCalculator {
    pub fn new(rates: FareRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &FareRates {
        &self.rates
    }

    pub fn rate_per_hour(&self, parking_type: ParkingType) -> Decimal {
        match parking_type {
            ParkingType::Car => self.rates.car_rate_per_hour,
            ParkingType::Bike => self.rates.bike_rate_per_hour,
        }
    }

    /// Multiplier applied to the base fare: `1 - recurring_discount` for
    /// recurring users, otherwise one.
    pub fn discount_factor(&self, recurring: bool) -> Decimal {
        if recurring {
            Decimal::ONE - self.rates.recurring_discount
        } else {
            Decimal::ONE
        }
    }

    /// Price of `ticket`, which must carry an out time not earlier than its
    /// in time.
    ///
    /// Duration is counted in whole minutes. The result is not rounded.
    pub fn calculate_fare(&self, ticket: &Ticket, recurring: bool) -> DomainResult<Decimal> {
        let out_time = ticket.out_time.ok_or_else(|| {
            DomainError::Validation("Out time is not set on the ticket".to_string())
        })?;

        if out_time < ticket.in_time {
            return Err(DomainError::Validation(format!(
                "Out time provided is incorrect: {}",
                out_time
            )));
        }

        let minutes = (out_time - ticket.in_time).num_minutes();
        if self.rates.free_minutes > 0 && minutes <= self.rates.free_minutes {
            return Ok(Decimal::ZERO);
        }

        let hours = Decimal::from(minutes) / Decimal::from(60);
        let rate = self.rate_per_hour(ticket.parking_spot.parking_type);
        Ok(hours * rate * self.discount_factor(recurring))
    }
}

/// Format a price for the operator, rounded half-up to cents
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

// ── Tests ──────────────────────────────────────────────────────

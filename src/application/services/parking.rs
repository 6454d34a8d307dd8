//! Parking workflow: vehicle entry and exit

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::application::ports::OperatorConsole;
use crate::domain::{
    format_price, DomainError, DomainResult, FareCalculator, ParkingSpot, ParkingType,
    RepositoryProvider, Ticket,
};

/// Outcome of a successful entry or exit
#[derive(Debug, Clone)]
pub struct ParkingReceipt {
    pub ticket: Ticket,
    /// Vehicle had at least one completed ticket before this one
    pub recurring: bool,
}

/// Orchestrates spot allocation, ticketing and fares
pub struct ParkingService {
    repos: Arc<dyn RepositoryProvider>,
    console: Arc<dyn OperatorConsole>,
    fares: FareCalculator,
}

impl ParkingService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        console: Arc<dyn OperatorConsole>,
        fares: FareCalculator,
    ) -> Self {
        Self {
            repos,
            console,
            fares,
        }
    }

    /// Ask for a vehicle type and look up a free spot for it.
    ///
    /// Returns `None` for an unknown selection, a full lot or a store error.
    pub async fn get_next_parking_number_if_available(&self) -> Option<ParkingSpot> {
        match self.find_available_spot().await {
            Ok(spot) => Some(spot),
            Err(e) => {
                warn!(error = %e, "No parking spot allocated");
                None
            }
        }
    }

    /// Allocate a spot to an arriving vehicle and issue its ticket.
    pub async fn process_incoming_vehicle(&self) -> DomainResult<ParkingReceipt> {
        let mut spot = self.find_available_spot().await?;

        spot.occupy();
        if let Err(e) = self.repos.parking_spots().update_parking(&spot).await {
            error!(spot = spot.id, error = %e, "Failed to mark parking spot as occupied");
            return Err(e);
        }

        let vehicle_reg_number = match self.read_vehicle_reg_number() {
            Ok(reg) => reg,
            Err(e) => {
                warn!(spot = spot.id, error = %e, "No registration number, releasing spot");
                self.release_spot(&mut spot).await;
                return Err(e);
            }
        };
        let recurring = self.is_recurring(&vehicle_reg_number).await;

        let ticket = Ticket::new(
            self.repos.tickets().next_id().await,
            spot.clone(),
            vehicle_reg_number,
        );

        if let Err(e) = self.repos.tickets().save_ticket(ticket.clone()).await {
            error!(
                ticket_id = ticket.id,
                vehicle = %ticket.vehicle_reg_number,
                error = %e,
                "Failed to save ticket, releasing spot"
            );
            self.release_spot(&mut spot).await;
            return Err(e);
        }

        if recurring {
            self.console.display(
                "Welcome back! As a recurring user of our parking lot, \
                 you'll benefit from a 5% discount.",
            );
        }
        self.console.display("Generated Ticket and saved in DB");
        self.console
            .display(&format!("Please park your vehicle in spot number: {}", spot.id));
        self.console.display(&format!(
            "Recorded in-time for vehicle number: {} is: {}",
            ticket.vehicle_reg_number,
            ticket.in_time.format("%Y-%m-%d %H:%M:%S")
        ));

        info!(
            ticket_id = ticket.id,
            spot = spot.id,
            parking_type = %spot.parking_type,
            vehicle = %ticket.vehicle_reg_number,
            recurring,
            "Vehicle parked"
        );

        Ok(ParkingReceipt { ticket, recurring })
    }

    /// Close the ticket of a leaving vehicle, charge the fare and free its spot.
    ///
    /// The spot is released even when the fare or the ticket update fails;
    /// that error is still returned.
    pub async fn process_exiting_vehicle(&self) -> DomainResult<ParkingReceipt> {
        let vehicle_reg_number = self.read_vehicle_reg_number()?;

        let mut ticket = match self.repos.tickets().get_ticket(&vehicle_reg_number).await? {
            Some(ticket) => ticket,
            None => {
                warn!(vehicle = %vehicle_reg_number, "No open ticket for exiting vehicle");
                return Err(DomainError::ticket_not_found(&vehicle_reg_number));
            }
        };

        let recurring = self.is_recurring(&vehicle_reg_number).await;
        ticket.out_time = Some(Utc::now());

        let ticket_update = match self.fares.calculate_fare(&ticket, recurring) {
            Ok(price) => {
                ticket.price = price;
                self.repos.tickets().update_ticket(&ticket).await
            }
            Err(e) => Err(e),
        };
        if let Err(e) = &ticket_update {
            error!(ticket_id = ticket.id, error = %e, "Unable to update ticket information");
            self.console
                .display("Unable to update ticket information. Error occurred");
        }

        self.release_spot(&mut ticket.parking_spot).await;

        ticket_update?;

        self.console
            .display(&format!("Please pay the parking fare: {}", format_price(ticket.price)));
        if let Some(out_time) = ticket.out_time {
            self.console.display(&format!(
                "Recorded out-time for vehicle number: {} is: {}",
                ticket.vehicle_reg_number,
                out_time.format("%Y-%m-%d %H:%M:%S")
            ));
        }

        info!(
            ticket_id = ticket.id,
            spot = ticket.parking_spot.id,
            vehicle = %ticket.vehicle_reg_number,
            price = %ticket.price,
            recurring,
            "Vehicle exited"
        );

        Ok(ParkingReceipt { ticket, recurring })
    }

    /// Mark `spot` available and persist it; failures are only logged.
    async fn release_spot(&self, spot: &mut ParkingSpot) {
        spot.release();
        if let Err(e) = self.repos.parking_spots().update_parking(spot).await {
            error!(spot = spot.id, error = %e, "Failed to release parking spot");
        }
    }

    async fn find_available_spot(&self) -> DomainResult<ParkingSpot> {
        let parking_type = self.read_vehicle_type()?;

        match self
            .repos
            .parking_spots()
            .get_next_available_slot(parking_type)
            .await
        {
            Ok(Some(id)) => Ok(ParkingSpot::new(id, parking_type, true)),
            Ok(None) => {
                self.console.display(
                    "Error fetching parking number from DB. Parking slots might be full",
                );
                Err(DomainError::NoSpotAvailable(parking_type))
            }
            Err(e) => {
                error!(%parking_type, error = %e, "Failed to query available parking spots");
                Err(e)
            }
        }
    }

    fn read_vehicle_type(&self) -> DomainResult<ParkingType> {
        self.console.display("Please select vehicle type from menu");
        self.console.display("1 CAR");
        self.console.display("2 BIKE");

        let selection = self.console.read_selection();
        selection
            .and_then(ParkingType::from_selection)
            .ok_or_else(|| {
                self.console.display("Incorrect input provided");
                DomainError::Validation(format!("Unknown vehicle type selection: {:?}", selection))
            })
    }

    fn read_vehicle_reg_number(&self) -> DomainResult<String> {
        self.console
            .display("Please type the vehicle registration number and press enter key");
        self.console.read_vehicle_registration_number()
    }

    async fn is_recurring(&self, vehicle_reg_number: &str) -> bool {
        match self.repos.tickets().get_nb_ticket(vehicle_reg_number).await {
            Ok(count) => count > 0,
            Err(e) => {
                warn!(vehicle = %vehicle_reg_number, error = %e, "Failed to count prior tickets");
                false
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

//! Operator menu loop

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::{OperatorConsole, ParkingService};

/// Menu entries understood by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    VehicleEntering,
    VehicleExiting,
    Shutdown,
}

impl MenuAction {
    pub fn from_selection(selection: u32) -> Option<Self> {
        match selection {
            1 => Some(Self::VehicleEntering),
            2 => Some(Self::VehicleExiting),
            3 => Some(Self::Shutdown),
            _ => None,
        }
    }
}

pub struct InteractiveShell {
    service: Arc<ParkingService>,
    console: Arc<dyn OperatorConsole>,
}

impl InteractiveShell {
    pub fn new(service: Arc<ParkingService>, console: Arc<dyn OperatorConsole>) -> Self {
        Self { service, console }
    }

    /// Serve operator requests until shutdown is chosen or input ends.
    pub async fn run(&self) {
        info!("Interactive shell started");
        self.console.display("Welcome to Parking System!");

        loop {
            self.show_menu();

            let selection = self.console.read_selection();
            if selection.is_none() && self.console.is_closed() {
                info!("Console input ended, leaving shell");
                break;
            }

            match selection.and_then(MenuAction::from_selection) {
                Some(MenuAction::VehicleEntering) => {
                    if let Err(e) = self.service.process_incoming_vehicle().await {
                        warn!(error = %e, "Incoming vehicle not processed");
                        self.console
                            .display(&format!("Unable to process incoming vehicle: {}", e));
                    }
                }
                Some(MenuAction::VehicleExiting) => {
                    if let Err(e) = self.service.process_exiting_vehicle().await {
                        warn!(error = %e, "Exiting vehicle not processed");
                        self.console
                            .display(&format!("Unable to process exiting vehicle: {}", e));
                    }
                }
                Some(MenuAction::Shutdown) => {
                    self.console.display("Exiting from the system!");
                    info!("Shutdown requested from shell");
                    break;
                }
                None => {
                    self.console.display(
                        "Unsupported option. Please enter a number corresponding to the provided menu",
                    );
                }
            }
        }
    }

    fn show_menu(&self) {
        self.console
            .display("Please select an option. Simply enter the number to choose an action");
        self.console
            .display("1 New Vehicle Entering - Allocate Parking Space");
        self.console
            .display("2 Vehicle Exiting - Generate Ticket Price");
        self.console.display("3 Shutdown System");
    }
}

// ── Tests ──────────────────────────────────────────────────────

//! Parking spot domain entity

/// Vehicle type a spot accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParkingType {
    Car,
    Bike,
}

impl ParkingType {
    /// Map an operator menu selection to a vehicle type.
    ///
    /// `1` is a car, `2` is a bike; any other code is rejected.
    pub fn from_selection(selection: u32) -> Option<Self> {
        match selection {
            1 => Some(Self::Car),
            2 => Some(Self::Bike),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "CAR",
            Self::Bike => "BIKE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "CAR" => Some(Self::Car),
            "BIKE" => Some(Self::Bike),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParkingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single parking location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingSpot {
    /// Spot number shown to the operator
    pub id: i32,
    pub parking_type: ParkingType,
    /// False while a vehicle holds an open ticket on this spot
    pub available: bool,
}

impl ParkingSpot {
    pub fn new(id: i32, parking_type: ParkingType, available: bool) -> Self {
        Self {
            id,
            parking_type,
            available,
        }
    }

    pub fn occupy(&mut self) {
        self.available = false;
    }

    pub fn release(&mut self) {
        self.available = true;
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_maps_to_type() {
        assert_eq!(ParkingType::from_selection(1), Some(ParkingType::Car));
        assert_eq!(ParkingType::from_selection(2), Some(ParkingType::Bike));
    }

    #[test]
    fn unknown_selection_is_rejected() {
        assert_eq!(ParkingType::from_selection(0), None);
        assert_eq!(ParkingType::from_selection(3), None);
        assert_eq!(ParkingType::from_selection(9), None);
    }

    #[test]
    fn parking_type_parses_stored_names() {
        assert_eq!(ParkingType::from_str("CAR"), Some(ParkingType::Car));
        assert_eq!(ParkingType::from_str("BIKE"), Some(ParkingType::Bike));
        assert_eq!(ParkingType::from_str("TRUCK"), None);
        assert_eq!(ParkingType::Bike.to_string(), "BIKE");
    }

    #[test]
    fn occupy_and_release_toggle_availability() {
        let mut spot = ParkingSpot::new(1, ParkingType::Car, true);
        spot.occupy();
        assert!(!spot.available);
        spot.release();
        assert!(spot.available);
    }
}

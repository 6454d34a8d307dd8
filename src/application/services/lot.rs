//! Lot layout seeding

use tracing::info;

use crate::domain::{DomainResult, ParkingSpot, ParkingType, RepositoryProvider};

/// Create the lot's spots if the store has none yet.
///
/// Car spots are numbered first, then bike spots. Returns the number of
/// spots created; an already seeded store is left untouched.
pub async fn seed_lot_layout(
    repos: &dyn RepositoryProvider,
    car_spots: u32,
    bike_spots: u32,
) -> DomainResult<usize> {
    let existing = repos.parking_spots().find_all().await?;
    if !existing.is_empty() {
        info!(spots = existing.len(), "Parking lot already configured");
        return Ok(0);
    }

    let layout = std::iter::repeat(ParkingType::Car)
        .take(car_spots as usize)
        .chain(std::iter::repeat(ParkingType::Bike).take(bike_spots as usize));

    let mut created = 0;
    for (index, parking_type) in layout.enumerate() {
        let id = index as i32 + 1;
        repos
            .parking_spots()
            .save(ParkingSpot::new(id, parking_type, true))
            .await?;
        created += 1;
    }

    info!(car_spots, bike_spots, "Parking lot layout created");
    Ok(created)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    #[tokio::test]
    async fn seeds_cars_then_bikes() {
        let repos = InMemoryRepositoryProvider::new();
        let created = seed_lot_layout(&repos, 3, 2).await.unwrap();
        assert_eq!(created, 5);

        let spots = repos.parking_spots().find_all().await.unwrap();
        let types: Vec<_> = spots.iter().map(|s| (s.id, s.parking_type)).collect();
        assert_eq!(
            types,
            vec![
                (1, ParkingType::Car),
                (2, ParkingType::Car),
                (3, ParkingType::Car),
                (4, ParkingType::Bike),
                (5, ParkingType::Bike),
            ]
        );
        assert!(spots.iter().all(|s| s.available));
    }

    #[tokio::test]
    async fn existing_layout_is_kept() {
        let repos = InMemoryRepositoryProvider::with_spots([ParkingSpot::new(
            10,
            ParkingType::Bike,
            false,
        )]);
        assert_eq!(seed_lot_layout(&repos, 3, 2).await.unwrap(), 0);

        let spots = repos.parking_spots().find_all().await.unwrap();
        assert_eq!(spots, vec![ParkingSpot::new(10, ParkingType::Bike, false)]);
    }
}

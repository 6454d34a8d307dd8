//! SeaORM implementation of ParkingSpotRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use crate::domain::{
    DomainError, DomainResult, ParkingSpot, ParkingSpotRepository, ParkingType,
};
use crate::infrastructure::database::entities::parking;

pub struct SeaOrmParkingSpotRepository {
    db: DatabaseConnection,
}

impl SeaOrmParkingSpotRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(super) fn model_to_domain(m: parking::Model) -> DomainResult<ParkingSpot> {
    let parking_type = ParkingType::from_str(&m.parking_type).ok_or_else(|| {
        DomainError::Storage(format!(
            "Unknown parking type '{}' for spot {}",
            m.parking_type, m.parking_number
        ))
    })?;
    Ok(ParkingSpot::new(m.parking_number, parking_type, m.available))
}

pub(super) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

// ── ParkingSpotRepository impl ──────────────────────────────────

#[async_trait]
impl ParkingSpotRepository for SeaOrmParkingSpotRepository {
    async fn get_next_available_slot(
        &self,
        parking_type: ParkingType,
    ) -> DomainResult<Option<i32>> {
        let model = parking::Entity::find()
            .filter(parking::Column::ParkingType.eq(parking_type.as_str()))
            .filter(parking::Column::Available.eq(true))
            .order_by_asc(parking::Column::ParkingNumber)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(|m| m.parking_number))
    }

    async fn update_parking(&self, spot: &ParkingSpot) -> DomainResult<()> {
        debug!(spot = spot.id, available = spot.available, "Updating parking spot");

        let result = parking::Entity::update_many()
            .col_expr(parking::Column::Available, Expr::value(spot.available))
            .filter(parking::Column::ParkingNumber.eq(spot.id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "ParkingSpot",
                field: "parking_number",
                value: spot.id.to_string(),
            });
        }
        Ok(())
    }

    async fn save(&self, spot: ParkingSpot) -> DomainResult<()> {
        debug!(spot = spot.id, parking_type = %spot.parking_type, "Saving parking spot");

        let model = parking::ActiveModel {
            parking_number: Set(spot.id),
            parking_type: Set(spot.parking_type.as_str().to_string()),
            available: Set(spot.available),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<ParkingSpot>> {
        let models = parking::Entity::find()
            .order_by_asc(parking::Column::ParkingNumber)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }
}

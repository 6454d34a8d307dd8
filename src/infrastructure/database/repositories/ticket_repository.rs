//! SeaORM implementation of TicketRepository

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::debug;

use super::parking_spot_repository::{db_err, model_to_domain as spot_to_domain};
use crate::domain::{DomainError, DomainResult, Ticket, TicketRepository};
use crate::infrastructure::database::entities::{parking, ticket};

pub struct SeaOrmTicketRepository {
    db: DatabaseConnection,
}

impl SeaOrmTicketRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(t: ticket::Model, p: Option<parking::Model>) -> DomainResult<Ticket> {
    let spot = p.ok_or_else(|| {
        DomainError::Storage(format!(
            "Ticket {} references unknown spot {}",
            t.id, t.parking_number
        ))
    })?;
    let price = t.price.parse::<Decimal>().map_err(|e| {
        DomainError::Storage(format!("Invalid price '{}' on ticket {}: {}", t.price, t.id, e))
    })?;

    Ok(Ticket {
        id: t.id,
        parking_spot: spot_to_domain(spot)?,
        vehicle_reg_number: t.vehicle_reg_number,
        price,
        in_time: t.in_time,
        out_time: t.out_time,
    })
}

// ── TicketRepository impl ───────────────────────────────────────

#[async_trait]
impl TicketRepository for SeaOrmTicketRepository {
    async fn get_ticket(&self, vehicle_reg_number: &str) -> DomainResult<Option<Ticket>> {
        let row = ticket::Entity::find()
            .find_also_related(parking::Entity)
            .filter(ticket::Column::VehicleRegNumber.eq(vehicle_reg_number))
            .filter(ticket::Column::OutTime.is_null())
            .order_by_desc(ticket::Column::InTime)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        row.map(|(t, p)| model_to_domain(t, p)).transpose()
    }

    async fn save_ticket(&self, t: Ticket) -> DomainResult<()> {
        debug!(ticket_id = t.id, vehicle = %t.vehicle_reg_number, "Saving ticket");

        let model = ticket::ActiveModel {
            id: Set(t.id),
            parking_number: Set(t.parking_spot.id),
            vehicle_reg_number: Set(t.vehicle_reg_number),
            price: Set(t.price.to_string()),
            in_time: Set(t.in_time),
            out_time: Set(t.out_time),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn update_ticket(&self, t: &Ticket) -> DomainResult<()> {
        debug!(ticket_id = t.id, "Updating ticket");

        let existing = ticket::Entity::find_by_id(t.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Ticket",
                field: "id",
                value: t.id.to_string(),
            });
        };

        let mut active: ticket::ActiveModel = existing.into();
        active.price = Set(t.price.to_string());
        active.out_time = Set(t.out_time);
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn get_nb_ticket(&self, vehicle_reg_number: &str) -> DomainResult<u32> {
        let count = ticket::Entity::find()
            .filter(ticket::Column::VehicleRegNumber.eq(vehicle_reg_number))
            .filter(ticket::Column::OutTime.is_not_null())
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    async fn next_id(&self) -> i32 {
        ticket::Entity::find()
            .order_by_desc(ticket::Column::Id)
            .one(&self.db)
            .await
            .map(|last| last.map_or(1, |t| t.id + 1))
            .unwrap_or(1)
    }
}

//! Ticket entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    pub parking_number: i32,
    pub vehicle_reg_number: String,

    /// Decimal fare stored as text to keep full precision
    pub price: String,

    pub in_time: DateTimeUtc,

    #[sea_orm(nullable)]
    pub out_time: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::parking::Entity",
        from = "Column::ParkingNumber",
        to = "super::parking::Column::ParkingNumber"
    )]
    Parking,
}

impl Related<super::parking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! Create tickets table
//!
//! One row per stay; `out_time` stays NULL while the vehicle is parked.

use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_parking::Parking;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tickets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tickets::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Tickets::ParkingNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tickets::VehicleRegNumber)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tickets::Price)
                            .string()
                            .not_null()
                            .default("0"),
                    )
                    .col(
                        ColumnDef::new(Tickets::InTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Tickets::OutTime).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_parking")
                            .from(Tickets::Table, Tickets::ParkingNumber)
                            .to(Parking::Table, Parking::ParkingNumber),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tickets_vehicle_reg_number")
                    .table(Tickets::Table)
                    .col(Tickets::VehicleRegNumber)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tickets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Tickets {
    Table,
    Id,
    ParkingNumber,
    VehicleRegNumber,
    Price,
    InTime,
    OutTime,
}

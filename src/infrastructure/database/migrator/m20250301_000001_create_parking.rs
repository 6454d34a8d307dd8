//! Create parking table
//!
//! One row per spot with its vehicle type and availability flag.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Parking::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Parking::ParkingNumber)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Parking::ParkingType).string().not_null())
                    .col(
                        ColumnDef::new(Parking::Available)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_parking_type_available")
                    .table(Parking::Table)
                    .col(Parking::ParkingType)
                    .col(Parking::Available)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Parking::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Parking {
    Table,
    ParkingNumber,
    ParkingType,
    Available,
}

//! Create `car` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(integer(Car::Id).primary_key().auto_increment())
                    .col(string_len(Car::Make, 128).not_null())
                    .col(string_len(Car::Model, 128).not_null())
                    .col(integer(Car::ProductionYear).not_null())
                    .col(string_len(Car::LicensePlate, 32).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Car::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Car { Table, Id, Make, Model, ProductionYear, LicensePlate }

//! Create `garage` table.
//!
//! Holds service locations with a daily maintenance slot capacity.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Garage::Table)
                    .if_not_exists()
                    .col(integer(Garage::Id).primary_key().auto_increment())
                    .col(string_len(Garage::Name, 128).not_null())
                    .col(string_len(Garage::Location, 256).not_null())
                    .col(string_len(Garage::City, 128).not_null())
                    .col(integer(Garage::Capacity).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Garage::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Garage { Table, Id, Name, Location, City, Capacity }

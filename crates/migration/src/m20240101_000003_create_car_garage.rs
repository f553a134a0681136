//! Create `car_garage` association table.
//!
//! Composite primary key; rows are written explicitly by the service layer
//! when a car's garage set is created or replaced.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CarGarage::Table)
                    .if_not_exists()
                    .col(integer(CarGarage::CarId).not_null())
                    .col(integer(CarGarage::GarageId).not_null())
                    .primary_key(
                        Index::create()
                            .col(CarGarage::CarId)
                            .col(CarGarage::GarageId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cargarage_car")
                            .from(CarGarage::Table, CarGarage::CarId)
                            .to(Car::Table, Car::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cargarage_garage")
                            .from(CarGarage::Table, CarGarage::GarageId)
                            .to(Garage::Table, Garage::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CarGarage::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CarGarage { Table, CarId, GarageId }

#[derive(DeriveIden)]
enum Car { Table, Id }

#[derive(DeriveIden)]
enum Garage { Table, Id }

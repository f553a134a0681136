//! Create `maintenance_request` table with FKs to `car` and `garage`.
//!
//! `scheduled_date` is a calendar day; reports bucket on it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceRequest::Table)
                    .if_not_exists()
                    .col(integer(MaintenanceRequest::Id).primary_key().auto_increment())
                    .col(integer(MaintenanceRequest::CarId).not_null())
                    .col(string_len(MaintenanceRequest::CarName, 128).not_null())
                    .col(string_len(MaintenanceRequest::ServiceType, 128).not_null())
                    .col(date(MaintenanceRequest::ScheduledDate).not_null())
                    .col(integer(MaintenanceRequest::GarageId).not_null())
                    .col(string_len(MaintenanceRequest::GarageName, 128).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_car")
                            .from(MaintenanceRequest::Table, MaintenanceRequest::CarId)
                            .to(Car::Table, Car::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_garage")
                            .from(MaintenanceRequest::Table, MaintenanceRequest::GarageId)
                            .to(Garage::Table, Garage::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MaintenanceRequest::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MaintenanceRequest { Table, Id, CarId, CarName, ServiceType, ScheduledDate, GarageId, GarageName }

#[derive(DeriveIden)]
enum Car { Table, Id }

#[derive(DeriveIden)]
enum Garage { Table, Id }

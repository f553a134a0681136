use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Garage: index on city for the list filter
        manager
            .create_index(
                Index::create()
                    .name("idx_garage_city")
                    .table(Garage::Table)
                    .col(Garage::City)
                    .to_owned(),
            )
            .await?;

        // Car: index on make for the list filter
        manager
            .create_index(
                Index::create()
                    .name("idx_car_make")
                    .table(Car::Table)
                    .col(Car::Make)
                    .to_owned(),
            )
            .await?;

        // CarGarage: reverse lookup by garage
        manager
            .create_index(
                Index::create()
                    .name("idx_cargarage_garage")
                    .table(CarGarage::Table)
                    .col(CarGarage::GarageId)
                    .to_owned(),
            )
            .await?;

        // MaintenanceRequest: report queries filter by garage and date range
        manager
            .create_index(
                Index::create()
                    .name("idx_maintenance_garage")
                    .table(MaintenanceRequest::Table)
                    .col(MaintenanceRequest::GarageId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_maintenance_scheduled_date")
                    .table(MaintenanceRequest::Table)
                    .col(MaintenanceRequest::ScheduledDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_garage_city").table(Garage::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_car_make").table(Car::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_cargarage_garage").table(CarGarage::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_maintenance_garage").table(MaintenanceRequest::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_maintenance_scheduled_date").table(MaintenanceRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Garage { Table, City }

#[derive(DeriveIden)]
enum Car { Table, Make }

#[derive(DeriveIden)]
enum CarGarage { Table, GarageId }

#[derive(DeriveIden)]
enum MaintenanceRequest { Table, GarageId, ScheduledDate }

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use models::{garage, maintenance_request};

/// Read-side contract the report builders depend on. The store hands back
/// records already filtered by garage and inclusive date range; the builders
/// never filter themselves.
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn find_records(
        &self,
        garage_id: i32,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<maintenance_request::Model>, ServiceError>;

    async fn find_garage_by_id(&self, garage_id: i32) -> Result<Option<garage::Model>, ServiceError>;
}

/// SeaORM-backed store implementation.
pub struct SeaOrmReportStore {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ReportStore for SeaOrmReportStore {
    async fn find_records(
        &self,
        garage_id: i32,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<maintenance_request::Model>, ServiceError> {
        crate::maintenance_service::list_maintenance_requests(
            &self.db,
            None,
            Some(garage_id),
            Some(date_from),
            Some(date_to),
        )
        .await
    }

    async fn find_garage_by_id(&self, garage_id: i32) -> Result<Option<garage::Model>, ServiceError> {
        crate::garage_service::get_garage(&self.db, garage_id).await
    }
}

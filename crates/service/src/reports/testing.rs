//! In-memory `ReportStore` used by the builder tests.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::store::ReportStore;
use crate::errors::ServiceError;
use models::{garage, maintenance_request};

pub(crate) struct MemStore {
    pub garages: Vec<garage::Model>,
    pub records: Vec<maintenance_request::Model>,
}

#[async_trait]
impl ReportStore for MemStore {
    async fn find_records(
        &self,
        garage_id: i32,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<maintenance_request::Model>, ServiceError> {
        Ok(self
            .records
            .iter()
            .filter(|r| {
                r.garage_id == garage_id && r.scheduled_date >= date_from && r.scheduled_date <= date_to
            })
            .cloned()
            .collect())
    }

    async fn find_garage_by_id(&self, garage_id: i32) -> Result<Option<garage::Model>, ServiceError> {
        Ok(self.garages.iter().find(|g| g.id == garage_id).cloned())
    }
}

pub(crate) fn mem_garage(id: i32, capacity: i32) -> garage::Model {
    garage::Model {
        id,
        name: format!("garage-{id}"),
        location: "1 Main St".into(),
        city: "Sofia".into(),
        capacity,
    }
}

pub(crate) fn mem_record(id: i32, garage_id: i32, scheduled: &str) -> maintenance_request::Model {
    maintenance_request::Model {
        id,
        car_id: 1,
        car_name: "Toyota".into(),
        service_type: "oil change".into(),
        scheduled_date: scheduled.parse().expect("test date"),
        garage_id,
        garage_name: format!("garage-{garage_id}"),
    }
}

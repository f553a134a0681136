use chrono::Utc;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "maintenance_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub car_id: i32,
    /// Denormalized from the car's make at write time.
    pub car_name: String,
    pub service_type: String,
    /// Calendar day the maintenance slot is booked for.
    pub scheduled_date: Date,
    pub garage_id: i32,
    /// Denormalized from the garage's name at write time.
    pub garage_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Car, Garage }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Car => Entity::belongs_to(crate::car::Entity)
                .from(Column::CarId)
                .to(crate::car::Column::Id)
                .into(),
            Relation::Garage => Entity::belongs_to(crate::garage::Entity)
                .from(Column::GarageId)
                .to(crate::garage::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_scheduled_date(date: Date) -> Result<(), errors::ModelError> {
    let today = Utc::now().date_naive();
    if date < today {
        return Err(errors::ModelError::Validation(
            "scheduled date cannot be in the past".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn scheduled_date_not_in_past() {
        let today = Utc::now().date_naive();
        assert!(validate_scheduled_date(today).is_ok());
        assert!(validate_scheduled_date(today + Duration::days(30)).is_ok());
        assert!(validate_scheduled_date(today - Duration::days(1)).is_err());
    }
}

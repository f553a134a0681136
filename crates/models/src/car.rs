use chrono::{Datelike, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "car")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub make: String,
    pub model: String,
    pub production_year: i32,
    pub license_plate: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<crate::garage::Entity> for Entity {
    fn to() -> RelationDef {
        crate::car_garage::Relation::Garage.def()
    }

    fn via() -> Option<RelationDef> {
        Some(crate::car_garage::Relation::Car.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_production_year(year: i32) -> Result<(), errors::ModelError> {
    let current_year = Utc::now().year();
    if year > current_year {
        return Err(errors::ModelError::Validation(format!(
            "invalid production year: {year}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_year_not_in_future() {
        let current = Utc::now().year();
        assert!(validate_production_year(current).is_ok());
        assert!(validate_production_year(1998).is_ok());
        assert!(validate_production_year(current + 1).is_err());
    }
}

use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "garage")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub location: String,
    pub city: String,
    /// Maximum concurrent maintenance slots per day.
    pub capacity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<crate::car::Entity> for Entity {
    fn to() -> RelationDef {
        crate::car_garage::Relation::Car.def()
    }

    fn via() -> Option<RelationDef> {
        Some(crate::car_garage::Relation::Garage.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_capacity(capacity: i32) -> Result<(), errors::ModelError> {
    if capacity <= 0 {
        return Err(errors::ModelError::Validation(format!(
            "capacity must be a positive number: {capacity}"
        )));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    location: &str,
    city: &str,
    capacity: i32,
) -> Result<Model, errors::ModelError> {
    validate_capacity(capacity)?;
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        location: Set(location.to_string()),
        city: Set(city.to_string()),
        capacity: Set(capacity),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Association row between `car` and `garage`.
/// Rows are inserted and deleted explicitly by the service layer; there is no
/// implicit collection diffing.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "car_garage")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub car_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub garage_id: i32,
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

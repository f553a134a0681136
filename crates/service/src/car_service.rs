use std::collections::BTreeSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, Set, TransactionTrait,
};
use tracing::info;

use crate::errors::ServiceError;
use models::{car, car_garage, garage};

pub type CarWithGarages = (car::Model, Vec<garage::Model>);

/// Replace a car's garage association set with `target`.
///
/// The difference against the current rows is computed explicitly: additions
/// are inserted, removals deleted. Every target id must reference an existing
/// garage.
pub async fn replace_garages<C: ConnectionTrait>(
    conn: &C,
    car_id: i32,
    target: &[i32],
) -> Result<(), ServiceError> {
    let target: BTreeSet<i32> = target.iter().copied().collect();
    let found = garage::Entity::find()
        .filter(garage::Column::Id.is_in(target.iter().copied()))
        .all(conn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if found.len() != target.len() {
        return Err(ServiceError::Validation("some garage ids are invalid".into()));
    }

    let current: BTreeSet<i32> = car_garage::Entity::find()
        .filter(car_garage::Column::CarId.eq(car_id))
        .all(conn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .into_iter()
        .map(|row| row.garage_id)
        .collect();

    let additions: Vec<i32> = target.difference(&current).copied().collect();
    let removals: Vec<i32> = current.difference(&target).copied().collect();
    for garage_id in &additions {
        car_garage::ActiveModel { car_id: Set(car_id), garage_id: Set(*garage_id) }
            .insert(conn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
    }
    for garage_id in &removals {
        car_garage::Entity::delete_by_id((car_id, *garage_id))
            .exec(conn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
    }
    info!(car_id, added = additions.len(), removed = removals.len(), "replaced car garage set");
    Ok(())
}

/// Create a car and its garage associations in one transaction.
pub async fn create_car(
    db: &DatabaseConnection,
    make: &str,
    model: &str,
    production_year: i32,
    license_plate: &str,
    garage_ids: &[i32],
) -> Result<CarWithGarages, ServiceError> {
    car::validate_production_year(production_year)?;
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let created = car::ActiveModel {
        id: NotSet,
        make: Set(make.to_string()),
        model: Set(model.to_string()),
        production_year: Set(production_year),
        license_plate: Set(license_plate.to_string()),
    }
    .insert(&txn)
    .await
    .map_err(|e| ServiceError::Db(e.to_string()))?;
    replace_garages(&txn, created.id, garage_ids).await?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    get_car(db, created.id).await?.ok_or_else(|| ServiceError::not_found("car"))
}

/// Get a car with its garages.
pub async fn get_car(db: &DatabaseConnection, id: i32) -> Result<Option<CarWithGarages>, ServiceError> {
    let mut rows = car::Entity::find_by_id(id)
        .find_with_related(garage::Entity)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows.pop())
}

/// List cars with their garages, applying the optional filters.
pub async fn list_cars(
    db: &DatabaseConnection,
    make: Option<&str>,
    garage_id: Option<i32>,
    from_year: Option<i32>,
    to_year: Option<i32>,
) -> Result<Vec<CarWithGarages>, ServiceError> {
    let mut query = car::Entity::find();
    if let Some(make) = make {
        query = query.filter(car::Column::Make.contains(make));
    }
    if let Some(from) = from_year {
        query = query.filter(car::Column::ProductionYear.gte(from));
    }
    if let Some(to) = to_year {
        query = query.filter(car::Column::ProductionYear.lte(to));
    }
    if let Some(garage_id) = garage_id {
        let car_ids: Vec<i32> = car_garage::Entity::find()
            .filter(car_garage::Column::GarageId.eq(garage_id))
            .all(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .into_iter()
            .map(|row| row.car_id)
            .collect();
        query = query.filter(car::Column::Id.is_in(car_ids));
    }
    let cars = query
        .find_with_related(garage::Entity)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(cars)
}

/// Partial update; when `garage_ids` is present the association set is
/// replaced inside the same transaction as the scalar fields.
pub async fn update_car(
    db: &DatabaseConnection,
    id: i32,
    make: Option<&str>,
    model: Option<&str>,
    production_year: Option<i32>,
    license_plate: Option<&str>,
    garage_ids: Option<&[i32]>,
) -> Result<CarWithGarages, ServiceError> {
    if let Some(year) = production_year {
        car::validate_production_year(year)?;
    }
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let mut am: car::ActiveModel = car::Entity::find_by_id(id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("car"))?
        .into();
    let mut changed = false;
    if let Some(v) = make { am.make = Set(v.to_string()); changed = true; }
    if let Some(v) = model { am.model = Set(v.to_string()); changed = true; }
    if let Some(v) = production_year { am.production_year = Set(v); changed = true; }
    if let Some(v) = license_plate { am.license_plate = Set(v.to_string()); changed = true; }
    if changed {
        am.update(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    }
    if let Some(target) = garage_ids {
        replace_garages(&txn, id, target).await?;
    }
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    get_car(db, id).await?.ok_or_else(|| ServiceError::not_found("car"))
}

/// Hard-delete a car; association rows and maintenance requests cascade.
pub async fn delete_car(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = car::Entity::delete_by_id(id).exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garage_service;
    use crate::test_support::get_db;
    use uuid::Uuid;

    #[tokio::test]
    async fn car_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let g1 = garage_service::create_garage(&db, &format!("svc_g1_{}", Uuid::new_v4()), "1 North Blvd", "Sofia", 3).await?;
        let g2 = garage_service::create_garage(&db, &format!("svc_g2_{}", Uuid::new_v4()), "2 South Blvd", "Plovdiv", 4).await?;

        let plate = format!("CA{}", &Uuid::new_v4().to_string()[..6]);
        let (created, garages) = create_car(&db, "Toyota", "Corolla", 2018, &plate, &[g1.id, g2.id]).await?;
        assert_eq!(created.make, "Toyota");
        assert_eq!(garages.len(), 2);

        assert!(create_car(&db, "Toyota", "Corolla", 2018, &plate, &[g1.id, -1]).await.is_err());

        let (found, found_garages) = get_car(&db, created.id).await?.unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found_garages.len(), 2);

        let by_garage = list_cars(&db, None, Some(g1.id), None, None).await?;
        assert!(by_garage.iter().any(|(c, _)| c.id == created.id));
        let by_year = list_cars(&db, Some("Toy"), None, Some(2017), Some(2019)).await?;
        assert!(by_year.iter().any(|(c, _)| c.id == created.id));
        let outside_year = list_cars(&db, None, None, Some(2019), None).await?;
        assert!(!outside_year.iter().any(|(c, _)| c.id == created.id));

        // Replacing the association set keeps only the target garages
        let (updated, updated_garages) =
            update_car(&db, created.id, None, Some("Corolla Cross"), None, None, Some(&[g2.id])).await?;
        assert_eq!(updated.model, "Corolla Cross");
        assert_eq!(updated_garages.len(), 1);
        assert_eq!(updated_garages[0].id, g2.id);

        assert!(delete_car(&db, created.id).await?);
        assert!(get_car(&db, created.id).await?.is_none());

        garage_service::delete_garage(&db, g1.id).await?;
        garage_service::delete_garage(&db, g2.id).await?;
        Ok(())
    }
}

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, TryIntoModel};

use crate::errors::ServiceError;
use models::garage;

/// Create a garage.
pub async fn create_garage(
    db: &DatabaseConnection,
    name: &str,
    location: &str,
    city: &str,
    capacity: i32,
) -> Result<garage::Model, ServiceError> {
    let created = garage::create(db, name, location, city, capacity).await?;
    Ok(created)
}

/// Get a garage by id.
pub async fn get_garage(db: &DatabaseConnection, id: i32) -> Result<Option<garage::Model>, ServiceError> {
    let found = garage::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// List garages, optionally narrowed to cities containing `city`.
pub async fn list_garages(db: &DatabaseConnection, city: Option<&str>) -> Result<Vec<garage::Model>, ServiceError> {
    let mut query = garage::Entity::find();
    if let Some(city) = city {
        query = query.filter(garage::Column::City.contains(city));
    }
    let garages = query.all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(garages)
}

/// Partial update; capacity is re-validated when provided.
pub async fn update_garage(
    db: &DatabaseConnection,
    id: i32,
    name: Option<&str>,
    location: Option<&str>,
    city: Option<&str>,
    capacity: Option<i32>,
) -> Result<garage::Model, ServiceError> {
    if let Some(capacity) = capacity {
        garage::validate_capacity(capacity)?;
    }
    let mut am: garage::ActiveModel = garage::Entity::find_by_id(id)
        .one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("garage"))?
        .into();
    let mut changed = false;
    if let Some(v) = name { am.name = Set(v.to_string()); changed = true; }
    if let Some(v) = location { am.location = Set(v.to_string()); changed = true; }
    if let Some(v) = city { am.city = Set(v.to_string()); changed = true; }
    if let Some(v) = capacity { am.capacity = Set(v); changed = true; }
    if !changed {
        return am.try_into_model().map_err(|e| ServiceError::Db(e.to_string()));
    }
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Hard-delete a garage. Returns whether a row was removed.
pub async fn delete_garage(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = garage::Entity::delete_by_id(id).exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use uuid::Uuid;

    #[tokio::test]
    async fn garage_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let name = format!("svc_garage_{}", Uuid::new_v4());
        let g = create_garage(&db, &name, "12 Shipka Str", "Sofia", 5).await?;
        assert_eq!(g.capacity, 5);

        assert!(create_garage(&db, &name, "12 Shipka Str", "Sofia", 0).await.is_err());

        let found = get_garage(&db, g.id).await?.unwrap();
        assert_eq!(found.name, name);

        let listed = list_garages(&db, Some("Sofia")).await?;
        assert!(listed.iter().any(|m| m.id == g.id));

        let updated = update_garage(&db, g.id, None, None, None, Some(9)).await?;
        assert_eq!(updated.capacity, 9);
        assert!(update_garage(&db, g.id, None, None, None, Some(-1)).await.is_err());

        assert!(delete_garage(&db, g.id).await?);
        assert!(get_garage(&db, g.id).await?.is_none());
        assert!(!delete_garage(&db, g.id).await?);
        Ok(())
    }
}

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set, TryIntoModel,
};

use crate::errors::ServiceError;
use models::{car, garage, maintenance_request};

/// Create a maintenance request. The referenced car and garage must exist;
/// their names are denormalized onto the request row at write time.
pub async fn create_maintenance_request(
    db: &DatabaseConnection,
    car_id: i32,
    service_type: &str,
    scheduled_date: NaiveDate,
    garage_id: i32,
) -> Result<maintenance_request::Model, ServiceError> {
    maintenance_request::validate_scheduled_date(scheduled_date)?;
    let car = car::Entity::find_by_id(car_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("car"))?;
    let garage = garage::Entity::find_by_id(garage_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("garage"))?;

    let am = maintenance_request::ActiveModel {
        id: NotSet,
        car_id: Set(car_id),
        car_name: Set(car.make),
        service_type: Set(service_type.to_string()),
        scheduled_date: Set(scheduled_date),
        garage_id: Set(garage_id),
        garage_name: Set(garage.name),
    };
    let created = am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(created)
}

/// Get a maintenance request by id.
pub async fn get_maintenance_request(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<maintenance_request::Model>, ServiceError> {
    let found = maintenance_request::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// List maintenance requests, applying the optional filters. Date bounds are
/// inclusive.
pub async fn list_maintenance_requests(
    db: &DatabaseConnection,
    car_id: Option<i32>,
    garage_id: Option<i32>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<Vec<maintenance_request::Model>, ServiceError> {
    let mut query = maintenance_request::Entity::find();
    if let Some(car_id) = car_id {
        query = query.filter(maintenance_request::Column::CarId.eq(car_id));
    }
    if let Some(garage_id) = garage_id {
        query = query.filter(maintenance_request::Column::GarageId.eq(garage_id));
    }
    if let Some(from) = start_date {
        query = query.filter(maintenance_request::Column::ScheduledDate.gte(from));
    }
    if let Some(to) = end_date {
        query = query.filter(maintenance_request::Column::ScheduledDate.lte(to));
    }
    let requests = query.all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(requests)
}

/// Partial update; changing the car or garage re-denormalizes the name, and a
/// new scheduled date is re-validated.
pub async fn update_maintenance_request(
    db: &DatabaseConnection,
    id: i32,
    car_id: Option<i32>,
    service_type: Option<&str>,
    scheduled_date: Option<NaiveDate>,
    garage_id: Option<i32>,
) -> Result<maintenance_request::Model, ServiceError> {
    if let Some(date) = scheduled_date {
        maintenance_request::validate_scheduled_date(date)?;
    }
    let mut am: maintenance_request::ActiveModel = maintenance_request::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("maintenance request"))?
        .into();
    let mut changed = false;
    if let Some(car_id) = car_id {
        let car = car::Entity::find_by_id(car_id)
            .one(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .ok_or_else(|| ServiceError::not_found("car"))?;
        am.car_id = Set(car_id);
        am.car_name = Set(car.make);
        changed = true;
    }
    if let Some(v) = service_type {
        am.service_type = Set(v.to_string());
        changed = true;
    }
    if let Some(date) = scheduled_date {
        am.scheduled_date = Set(date);
        changed = true;
    }
    if let Some(garage_id) = garage_id {
        let garage = garage::Entity::find_by_id(garage_id)
            .one(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .ok_or_else(|| ServiceError::not_found("garage"))?;
        am.garage_id = Set(garage_id);
        am.garage_name = Set(garage.name);
        changed = true;
    }
    if !changed {
        return am.try_into_model().map_err(|e| ServiceError::Db(e.to_string()));
    }
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Hard-delete a maintenance request. Returns whether a row was removed.
pub async fn delete_maintenance_request(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = maintenance_request::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{car_service, garage_service};
    use crate::test_support::get_db;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    #[tokio::test]
    async fn maintenance_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let g = garage_service::create_garage(&db, &format!("svc_mg_{}", Uuid::new_v4()), "3 East Str", "Varna", 2).await?;
        let plate = format!("B{}", &Uuid::new_v4().to_string()[..6]);
        let (c, _) = car_service::create_car(&db, "Honda", "Civic", 2020, &plate, &[g.id]).await?;

        let in_ten_days = Utc::now().date_naive() + Duration::days(10);
        let created = create_maintenance_request(&db, c.id, "oil change", in_ten_days, g.id).await?;
        assert_eq!(created.car_name, "Honda");
        assert_eq!(created.garage_name, g.name);

        let yesterday = Utc::now().date_naive() - Duration::days(1);
        assert!(create_maintenance_request(&db, c.id, "oil change", yesterday, g.id).await.is_err());
        assert!(create_maintenance_request(&db, -1, "oil change", in_ten_days, g.id).await.is_err());

        let found = get_maintenance_request(&db, created.id).await?.unwrap();
        assert_eq!(found.service_type, "oil change");

        let listed = list_maintenance_requests(&db, Some(c.id), Some(g.id), Some(in_ten_days), Some(in_ten_days)).await?;
        assert!(listed.iter().any(|m| m.id == created.id));
        let outside = list_maintenance_requests(&db, Some(c.id), None, Some(in_ten_days + Duration::days(1)), None).await?;
        assert!(!outside.iter().any(|m| m.id == created.id));

        let in_twenty_days = Utc::now().date_naive() + Duration::days(20);
        let updated = update_maintenance_request(&db, created.id, None, Some("tire rotation"), Some(in_twenty_days), None).await?;
        assert_eq!(updated.service_type, "tire rotation");
        assert_eq!(updated.scheduled_date, in_twenty_days);

        assert!(delete_maintenance_request(&db, created.id).await?);
        assert!(get_maintenance_request(&db, created.id).await?.is_none());

        car_service::delete_car(&db, c.id).await?;
        garage_service::delete_garage(&db, g.id).await?;
        Ok(())
    }
}

use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::{IntoParams, ToSchema};

use service::car_service::{self, CarWithGarages};

use crate::errors::JsonApiError;
use crate::routes::garages::GarageResponse;
use crate::routes::ServerState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub production_year: i32,
    pub license_plate: String,
    pub garages: Vec<GarageResponse>,
}

/// Static projection from the stored entity plus its garages to the wire shape.
impl From<CarWithGarages> for CarResponse {
    fn from((car, garages): CarWithGarages) -> Self {
        Self {
            id: car.id,
            make: car.make,
            model: car.model,
            production_year: car.production_year,
            license_plate: car.license_plate,
            garages: garages.into_iter().map(GarageResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarInput {
    pub make: String,
    pub model: String,
    pub production_year: i32,
    pub license_plate: String,
    #[serde(default)]
    pub garage_ids: Vec<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarInput {
    pub make: Option<String>,
    pub model: Option<String>,
    pub production_year: Option<i32>,
    pub license_plate: Option<String>,
    pub garage_ids: Option<Vec<i32>>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListCarsQuery {
    pub car_make: Option<String>,
    pub garage_id: Option<i32>,
    pub from_year: Option<i32>,
    pub to_year: Option<i32>,
}

#[utoipa::path(
    get, path = "/cars", tag = "cars",
    params(ListCarsQuery),
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListCarsQuery>,
) -> Result<Json<Vec<CarResponse>>, JsonApiError> {
    let cars = car_service::list_cars(&state.db, q.car_make.as_deref(), q.garage_id, q.from_year, q.to_year).await?;
    info!(count = cars.len(), "list cars");
    Ok(Json(cars.into_iter().map(CarResponse::from).collect()))
}

#[utoipa::path(
    post, path = "/cars", tag = "cars",
    request_body = CreateCarInput,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateCarInput>,
) -> Result<Json<CarResponse>, JsonApiError> {
    let created = car_service::create_car(
        &state.db,
        &input.make,
        &input.model,
        input.production_year,
        &input.license_plate,
        &input.garage_ids,
    )
    .await?;
    info!(id = created.0.id, make = %created.0.make, "created car");
    Ok(Json(CarResponse::from(created)))
}

#[utoipa::path(
    get, path = "/cars/{id}", tag = "cars",
    params(("id" = i32, Path, description = "Car ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<CarResponse>, StatusCode> {
    match car_service::get_car(&state.db, id).await {
        Ok(Some(found)) => Ok(Json(CarResponse::from(found))),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[utoipa::path(
    put, path = "/cars/{id}", tag = "cars",
    params(("id" = i32, Path, description = "Car ID")),
    request_body = UpdateCarInput,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateCarInput>,
) -> Result<Json<CarResponse>, JsonApiError> {
    let updated = car_service::update_car(
        &state.db,
        id,
        input.make.as_deref(),
        input.model.as_deref(),
        input.production_year,
        input.license_plate.as_deref(),
        input.garage_ids.as_deref(),
    )
    .await?;
    info!(id = updated.0.id, "updated car");
    Ok(Json(CarResponse::from(updated)))
}

#[utoipa::path(
    delete, path = "/cars/{id}", tag = "cars",
    params(("id" = i32, Path, description = "Car ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> StatusCode {
    match car_service::delete_car(&state.db, id).await {
        Ok(true) => { info!(id, "deleted car"); StatusCode::NO_CONTENT }
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => { error!(err = %e, "delete car failed"); StatusCode::INTERNAL_SERVER_ERROR }
    }
}

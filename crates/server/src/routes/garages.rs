use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::{IntoParams, ToSchema};

use models::garage;
use service::garage_service;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GarageResponse {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub city: String,
    pub capacity: i32,
}

/// Static projection from the stored entity to the wire shape.
impl From<garage::Model> for GarageResponse {
    fn from(m: garage::Model) -> Self {
        Self { id: m.id, name: m.name, location: m.location, city: m.city, capacity: m.capacity }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGarageInput {
    pub name: String,
    pub location: String,
    pub city: String,
    pub capacity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGarageInput {
    pub name: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub capacity: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListGaragesQuery {
    pub city: Option<String>,
}

#[utoipa::path(
    get, path = "/garages", tag = "garages",
    params(ListGaragesQuery),
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListGaragesQuery>,
) -> Result<Json<Vec<GarageResponse>>, JsonApiError> {
    let garages = garage_service::list_garages(&state.db, q.city.as_deref()).await?;
    info!(count = garages.len(), "list garages");
    Ok(Json(garages.into_iter().map(GarageResponse::from).collect()))
}

#[utoipa::path(
    post, path = "/garages", tag = "garages",
    request_body = CreateGarageInput,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateGarageInput>,
) -> Result<Json<GarageResponse>, JsonApiError> {
    let created =
        garage_service::create_garage(&state.db, &input.name, &input.location, &input.city, input.capacity).await?;
    info!(id = created.id, city = %created.city, "created garage");
    Ok(Json(GarageResponse::from(created)))
}

#[utoipa::path(
    get, path = "/garages/{id}", tag = "garages",
    params(("id" = i32, Path, description = "Garage ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<GarageResponse>, StatusCode> {
    match garage_service::get_garage(&state.db, id).await {
        Ok(Some(m)) => Ok(Json(GarageResponse::from(m))),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[utoipa::path(
    put, path = "/garages/{id}", tag = "garages",
    params(("id" = i32, Path, description = "Garage ID")),
    request_body = UpdateGarageInput,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateGarageInput>,
) -> Result<Json<GarageResponse>, JsonApiError> {
    let updated = garage_service::update_garage(
        &state.db,
        id,
        input.name.as_deref(),
        input.location.as_deref(),
        input.city.as_deref(),
        input.capacity,
    )
    .await?;
    info!(id = updated.id, "updated garage");
    Ok(Json(GarageResponse::from(updated)))
}

#[utoipa::path(
    delete, path = "/garages/{id}", tag = "garages",
    params(("id" = i32, Path, description = "Garage ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> StatusCode {
    match garage_service::delete_garage(&state.db, id).await {
        Ok(true) => { info!(id, "deleted garage"); StatusCode::NO_CONTENT }
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => { error!(err = %e, "delete garage failed"); StatusCode::INTERNAL_SERVER_ERROR }
    }
}

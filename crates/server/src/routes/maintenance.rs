use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::{IntoParams, ToSchema};

use models::maintenance_request;
use service::maintenance_service;

use crate::errors::JsonApiError;
use crate::routes::{parse_date, ServerState};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequestResponse {
    pub id: i32,
    pub car_id: i32,
    pub car_name: String,
    pub service_type: String,
    pub scheduled_date: NaiveDate,
    pub garage_id: i32,
    pub garage_name: String,
}

/// Static projection from the stored entity to the wire shape.
impl From<maintenance_request::Model> for MaintenanceRequestResponse {
    fn from(m: maintenance_request::Model) -> Self {
        Self {
            id: m.id,
            car_id: m.car_id,
            car_name: m.car_name,
            service_type: m.service_type,
            scheduled_date: m.scheduled_date,
            garage_id: m.garage_id,
            garage_name: m.garage_name,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenanceRequestInput {
    pub car_id: i32,
    pub service_type: String,
    pub scheduled_date: String,
    pub garage_id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenanceRequestInput {
    pub car_id: Option<i32>,
    pub service_type: Option<String>,
    pub scheduled_date: Option<String>,
    pub garage_id: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListMaintenanceQuery {
    pub car_id: Option<i32>,
    pub garage_id: Option<i32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[utoipa::path(
    get, path = "/maintenance", tag = "maintenance",
    params(ListMaintenanceQuery),
    responses(
        (status = 200, description = "List OK"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListMaintenanceQuery>,
) -> Result<Json<Vec<MaintenanceRequestResponse>>, JsonApiError> {
    let start_date = q.start_date.as_deref().map(|v| parse_date("startDate", v)).transpose()?;
    let end_date = q.end_date.as_deref().map(|v| parse_date("endDate", v)).transpose()?;
    let requests =
        maintenance_service::list_maintenance_requests(&state.db, q.car_id, q.garage_id, start_date, end_date).await?;
    info!(count = requests.len(), "list maintenance requests");
    Ok(Json(requests.into_iter().map(MaintenanceRequestResponse::from).collect()))
}

#[utoipa::path(
    post, path = "/maintenance", tag = "maintenance",
    request_body = CreateMaintenanceRequestInput,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateMaintenanceRequestInput>,
) -> Result<Json<MaintenanceRequestResponse>, JsonApiError> {
    let scheduled_date = parse_date("scheduledDate", &input.scheduled_date)?;
    let created = maintenance_service::create_maintenance_request(
        &state.db,
        input.car_id,
        &input.service_type,
        scheduled_date,
        input.garage_id,
    )
    .await?;
    info!(id = created.id, garage_id = created.garage_id, "created maintenance request");
    Ok(Json(MaintenanceRequestResponse::from(created)))
}

#[utoipa::path(
    get, path = "/maintenance/{id}", tag = "maintenance",
    params(("id" = i32, Path, description = "Maintenance request ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<MaintenanceRequestResponse>, StatusCode> {
    match maintenance_service::get_maintenance_request(&state.db, id).await {
        Ok(Some(m)) => Ok(Json(MaintenanceRequestResponse::from(m))),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[utoipa::path(
    put, path = "/maintenance/{id}", tag = "maintenance",
    params(("id" = i32, Path, description = "Maintenance request ID")),
    request_body = UpdateMaintenanceRequestInput,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateMaintenanceRequestInput>,
) -> Result<Json<MaintenanceRequestResponse>, JsonApiError> {
    let scheduled_date = input.scheduled_date.as_deref().map(|v| parse_date("scheduledDate", v)).transpose()?;
    let updated = maintenance_service::update_maintenance_request(
        &state.db,
        id,
        input.car_id,
        input.service_type.as_deref(),
        scheduled_date,
        input.garage_id,
    )
    .await?;
    info!(id = updated.id, "updated maintenance request");
    Ok(Json(MaintenanceRequestResponse::from(updated)))
}

#[utoipa::path(
    delete, path = "/maintenance/{id}", tag = "maintenance",
    params(("id" = i32, Path, description = "Maintenance request ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> StatusCode {
    match maintenance_service::delete_maintenance_request(&state.db, id).await {
        Ok(true) => { info!(id, "deleted maintenance request"); StatusCode::NO_CONTENT }
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => { error!(err = %e, "delete maintenance request failed"); StatusCode::INTERNAL_SERVER_ERROR }
    }
}

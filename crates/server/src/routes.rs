use axum::{routing::get, Json, Router};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::errors::ServiceError;

pub mod cars;
pub mod garages;
pub mod maintenance;
pub mod reports;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Parse a `YYYY-MM-DD` query value, naming the offending field on failure.
pub(crate) fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ServiceError> {
    value
        .parse()
        .map_err(|_| ServiceError::invalid_input(format!("invalid {field}: expected YYYY-MM-DD, got {value}")))
}

/// Build the full application router: entity CRUD, reports, health, and docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/garages", get(garages::list).post(garages::create))
        .route("/garages/:id", get(garages::get).put(garages::update).delete(garages::delete))
        .route("/cars", get(cars::list).post(cars::create))
        .route("/cars/:id", get(cars::get).put(cars::update).delete(cars::delete))
        .route("/maintenance", get(maintenance::list).post(maintenance::create))
        .route("/maintenance/:id", get(maintenance::get).put(maintenance::update).delete(maintenance::delete))
        // Reports get their own prefix; a static segment under /garages or
        // /maintenance would collide with the `:id` capture
        .route("/reports/monthlyRequests", get(reports::monthly_requests_report))
        .route("/reports/dailyAvailability", get(reports::daily_availability_report))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}

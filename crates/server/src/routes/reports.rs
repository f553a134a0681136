use axum::{extract::{Query, State}, Json};
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;

use service::reports::calendar::YearMonth;
use service::reports::daily::{build_daily_availability_report, DailyReportEntry};
use service::reports::monthly::{build_monthly_report, MonthlyReportEntry};
use service::reports::store::SeaOrmReportStore;

use crate::errors::JsonApiError;
use crate::routes::{parse_date, ServerState};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReportQuery {
    pub garage_id: i32,
    /// Inclusive start, `YYYY-MM`.
    pub start_month: String,
    /// Inclusive end, `YYYY-MM`.
    pub end_month: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct DailyReportQuery {
    pub garage_id: i32,
    /// Inclusive start, `YYYY-MM-DD`.
    pub start_date: String,
    /// Inclusive end, `YYYY-MM-DD`.
    pub end_date: String,
}

#[utoipa::path(
    get, path = "/reports/monthlyRequests", tag = "reports",
    params(MonthlyReportQuery),
    responses(
        (status = 200, description = "Report OK"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Report Failed")
    )
)]
pub async fn monthly_requests_report(
    State(state): State<ServerState>,
    Query(q): Query<MonthlyReportQuery>,
) -> Result<Json<Vec<MonthlyReportEntry>>, JsonApiError> {
    let start: YearMonth = q.start_month.parse()?;
    let end: YearMonth = q.end_month.parse()?;
    let store = SeaOrmReportStore { db: state.db.clone() };
    let entries = build_monthly_report(&store, q.garage_id, start, end).await?;
    info!(garage_id = q.garage_id, months = entries.len(), "monthly requests report");
    Ok(Json(entries))
}

#[utoipa::path(
    get, path = "/reports/dailyAvailability", tag = "reports",
    params(DailyReportQuery),
    responses(
        (status = 200, description = "Report OK"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Report Failed")
    )
)]
pub async fn daily_availability_report(
    State(state): State<ServerState>,
    Query(q): Query<DailyReportQuery>,
) -> Result<Json<Vec<DailyReportEntry>>, JsonApiError> {
    let start = parse_date("startDate", &q.start_date)?;
    let end = parse_date("endDate", &q.end_date)?;
    let store = SeaOrmReportStore { db: state.db.clone() };
    let entries = build_daily_availability_report(&store, q.garage_id, start, end).await?;
    info!(garage_id = q.garage_id, days = entries.len(), "daily availability report");
    Ok(Json(entries))
}

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(as = MonthlyReportEntry)]
pub struct MonthlyReportEntryDoc {
    pub year: i32,
    pub month: String,
    pub month_value: u32,
    pub leap_year: bool,
    pub requests: u64,
}

#[derive(ToSchema)]
#[schema(as = DailyReportEntry)]
pub struct DailyReportEntryDoc {
    pub date: String,
    pub requests: u64,
    pub available_capacity: i64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::garages::list,
        crate::routes::garages::create,
        crate::routes::garages::get,
        crate::routes::garages::update,
        crate::routes::garages::delete,
        crate::routes::cars::list,
        crate::routes::cars::create,
        crate::routes::cars::get,
        crate::routes::cars::update,
        crate::routes::cars::delete,
        crate::routes::maintenance::list,
        crate::routes::maintenance::create,
        crate::routes::maintenance::get,
        crate::routes::maintenance::update,
        crate::routes::maintenance::delete,
        crate::routes::reports::monthly_requests_report,
        crate::routes::reports::daily_availability_report,
    ),
    components(
        schemas(
            HealthResponse,
            MonthlyReportEntryDoc,
            DailyReportEntryDoc,
            crate::routes::garages::GarageResponse,
            crate::routes::garages::CreateGarageInput,
            crate::routes::garages::UpdateGarageInput,
            crate::routes::cars::CarResponse,
            crate::routes::cars::CreateCarInput,
            crate::routes::cars::UpdateCarInput,
            crate::routes::maintenance::MaintenanceRequestResponse,
            crate::routes::maintenance::CreateMaintenanceRequestInput,
            crate::routes::maintenance::UpdateMaintenanceRequestInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "garages"),
        (name = "cars"),
        (name = "maintenance"),
        (name = "reports")
    )
)]
pub struct ApiDoc;

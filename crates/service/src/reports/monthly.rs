use chrono::Datelike;
use serde::Serialize;

use super::calendar::{self, YearMonth};
use super::store::ReportStore;
use super::aggregate;
use crate::errors::ServiceError;

/// One month in the report range; months with no requests are included with a
/// zero count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReportEntry {
    pub year: i32,
    pub month: &'static str,
    pub month_value: u32,
    pub leap_year: bool,
    pub requests: u64,
}

/// Count maintenance requests per month for `garage_id` over the inclusive
/// `[start, end]` month range.
///
/// An unknown garage is not an error on this path; every month simply reports
/// zero requests.
pub async fn build_monthly_report<S: ReportStore + ?Sized>(
    store: &S,
    garage_id: i32,
    start: YearMonth,
    end: YearMonth,
) -> Result<Vec<MonthlyReportEntry>, ServiceError> {
    let months = calendar::enumerate_months(start, end)?;
    // The store indexes by exact date, so the month range widens to
    // [first day of start, last day of end].
    let records = store
        .find_records(garage_id, start.first_day(), end.last_day())
        .await?;
    let counts = aggregate::count_by_bucket(&records, |r| {
        (r.scheduled_date.year(), r.scheduled_date.month())
    });
    months
        .into_iter()
        .map(|ym| {
            Ok(MonthlyReportEntry {
                year: ym.year(),
                month: calendar::month_name(ym.month())?,
                month_value: ym.month(),
                leap_year: calendar::is_leap_year(ym.year()),
                requests: counts.get(&(ym.year(), ym.month())).copied().unwrap_or(0),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::{mem_garage, mem_record, MemStore};

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).expect("test month")
    }

    #[tokio::test]
    async fn gap_fills_months_across_year_boundary() {
        let store = MemStore {
            garages: vec![mem_garage(1, 5)],
            records: vec![
                mem_record(1, 1, "2023-12-04"),
                mem_record(2, 1, "2023-12-18"),
            ],
        };
        let report = build_monthly_report(&store, 1, ym(2023, 12), ym(2024, 2)).await.unwrap();
        assert_eq!(report.len(), 3);

        assert_eq!(report[0].year, 2023);
        assert_eq!(report[0].month, "DECEMBER");
        assert_eq!(report[0].month_value, 12);
        assert!(!report[0].leap_year);
        assert_eq!(report[0].requests, 2);

        assert_eq!(report[1].month, "JANUARY");
        assert!(report[1].leap_year);
        assert_eq!(report[1].requests, 0);

        assert_eq!(report[2].month, "FEBRUARY");
        assert!(report[2].leap_year);
        assert_eq!(report[2].requests, 0);
    }

    #[tokio::test]
    async fn unknown_garage_reports_all_zero() {
        let store = MemStore { garages: vec![], records: vec![mem_record(1, 7, "2024-01-10")] };
        let report = build_monthly_report(&store, 99, ym(2024, 1), ym(2024, 3)).await.unwrap();
        assert_eq!(report.len(), 3);
        assert!(report.iter().all(|e| e.requests == 0));
    }

    #[tokio::test]
    async fn single_month_range_yields_one_entry() {
        let store = MemStore { garages: vec![mem_garage(1, 5)], records: vec![] };
        let report = build_monthly_report(&store, 1, ym(2024, 7), ym(2024, 7)).await.unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].month, "JULY");
        assert_eq!(report[0].requests, 0);
    }

    #[tokio::test]
    async fn leap_day_record_counts_in_february() {
        let store = MemStore {
            garages: vec![mem_garage(1, 5)],
            records: vec![mem_record(1, 1, "2024-02-29")],
        };
        let report = build_monthly_report(&store, 1, ym(2024, 2), ym(2024, 2)).await.unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].requests, 1);
    }

    #[tokio::test]
    async fn entry_count_matches_range_regardless_of_records() {
        let store = MemStore { garages: vec![mem_garage(1, 5)], records: vec![] };
        let report = build_monthly_report(&store, 1, ym(2022, 5), ym(2024, 3)).await.unwrap();
        assert_eq!(report.len(), 23);
        assert!(report.iter().all(|e| e.requests == 0));
    }

    #[tokio::test]
    async fn inverted_range_is_rejected() {
        let store = MemStore { garages: vec![], records: vec![] };
        let err = build_monthly_report(&store, 1, ym(2024, 3), ym(2024, 2)).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidRange(_)));
    }

    #[tokio::test]
    async fn repeated_calls_are_identical() {
        let store = MemStore {
            garages: vec![mem_garage(1, 5)],
            records: vec![mem_record(1, 1, "2024-01-15"), mem_record(2, 1, "2024-03-02")],
        };
        let first = build_monthly_report(&store, 1, ym(2024, 1), ym(2024, 4)).await.unwrap();
        let second = build_monthly_report(&store, 1, ym(2024, 1), ym(2024, 4)).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn serializes_with_wire_field_names() {
        let store = MemStore { garages: vec![], records: vec![] };
        let report = build_monthly_report(&store, 1, ym(2024, 2), ym(2024, 2)).await.unwrap();
        let json = serde_json::to_value(&report[0]).unwrap();
        assert_eq!(json["year"], 2024);
        assert_eq!(json["month"], "FEBRUARY");
        assert_eq!(json["monthValue"], 2);
        assert_eq!(json["leapYear"], true);
        assert_eq!(json["requests"], 0);
    }
}

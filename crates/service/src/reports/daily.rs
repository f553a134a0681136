use chrono::NaiveDate;
use serde::Serialize;

use super::calendar;
use super::store::ReportStore;
use super::aggregate;
use crate::errors::ServiceError;

/// One day in the report range with the garage's remaining capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReportEntry {
    pub date: NaiveDate,
    pub requests: u64,
    /// `capacity - requests`; goes negative when the day is overbooked.
    pub available_capacity: i64,
}

/// Compute per-day request counts and remaining capacity for `garage_id` over
/// the inclusive `[start, end]` date range. The garage must exist; its
/// capacity is required for the subtraction.
pub async fn build_daily_availability_report<S: ReportStore + ?Sized>(
    store: &S,
    garage_id: i32,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DailyReportEntry>, ServiceError> {
    let days = calendar::enumerate_days(start, end)?;
    let garage = store
        .find_garage_by_id(garage_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("garage"))?;
    let records = store.find_records(garage_id, start, end).await?;
    let counts = aggregate::count_by_bucket(&records, |r| r.scheduled_date);
    Ok(days
        .into_iter()
        .map(|date| {
            let requests = counts.get(&date).copied().unwrap_or(0);
            DailyReportEntry {
                date,
                requests,
                available_capacity: i64::from(garage.capacity) - requests as i64,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::{mem_garage, mem_record, MemStore};

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("test date")
    }

    #[tokio::test]
    async fn window_around_one_booking() {
        let store = MemStore {
            garages: vec![mem_garage(1, 5)],
            records: vec![mem_record(1, 1, "2024-02-15")],
        };
        let report =
            build_daily_availability_report(&store, 1, date("2024-02-10"), date("2024-02-20"))
                .await
                .unwrap();
        assert_eq!(report.len(), 11);
        for entry in &report {
            if entry.date == date("2024-02-15") {
                assert_eq!(entry.requests, 1);
                assert_eq!(entry.available_capacity, 4);
            } else {
                assert_eq!(entry.requests, 0);
                assert_eq!(entry.available_capacity, 5);
            }
        }
    }

    #[tokio::test]
    async fn capacity_identity_holds_for_every_day() {
        let store = MemStore {
            garages: vec![mem_garage(1, 3)],
            records: vec![
                mem_record(1, 1, "2024-05-02"),
                mem_record(2, 1, "2024-05-02"),
                mem_record(3, 1, "2024-05-03"),
                mem_record(4, 1, "2024-05-07"),
            ],
        };
        let report =
            build_daily_availability_report(&store, 1, date("2024-05-01"), date("2024-05-08"))
                .await
                .unwrap();
        assert_eq!(report.len(), 8);
        for entry in &report {
            assert_eq!(entry.available_capacity + entry.requests as i64, 3);
        }
    }

    #[tokio::test]
    async fn overbooked_day_goes_negative() {
        let store = MemStore {
            garages: vec![mem_garage(1, 1)],
            records: vec![
                mem_record(1, 1, "2024-06-10"),
                mem_record(2, 1, "2024-06-10"),
                mem_record(3, 1, "2024-06-10"),
            ],
        };
        let report =
            build_daily_availability_report(&store, 1, date("2024-06-10"), date("2024-06-10"))
                .await
                .unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].requests, 3);
        assert_eq!(report[0].available_capacity, -2);
    }

    #[tokio::test]
    async fn unknown_garage_is_not_found() {
        let store = MemStore { garages: vec![], records: vec![] };
        let err =
            build_daily_availability_report(&store, 42, date("2024-01-01"), date("2024-01-02"))
                .await
                .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn single_day_range_yields_one_entry() {
        let store = MemStore { garages: vec![mem_garage(1, 2)], records: vec![] };
        let report =
            build_daily_availability_report(&store, 1, date("2024-03-01"), date("2024-03-01"))
                .await
                .unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].available_capacity, 2);
    }

    #[tokio::test]
    async fn inverted_range_is_rejected() {
        let store = MemStore { garages: vec![mem_garage(1, 2)], records: vec![] };
        let err =
            build_daily_availability_report(&store, 1, date("2024-03-02"), date("2024-03-01"))
                .await
                .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidRange(_)));
    }

    #[tokio::test]
    async fn serializes_with_wire_field_names() {
        let store = MemStore {
            garages: vec![mem_garage(1, 5)],
            records: vec![mem_record(1, 1, "2024-02-15")],
        };
        let report =
            build_daily_availability_report(&store, 1, date("2024-02-15"), date("2024-02-15"))
                .await
                .unwrap();
        let json = serde_json::to_value(&report[0]).unwrap();
        assert_eq!(json["date"], "2024-02-15");
        assert_eq!(json["requests"], 1);
        assert_eq!(json["availableCapacity"], 4);
    }
}

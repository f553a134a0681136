use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::errors::ServiceError;

const MONTH_NAMES: [&str; 12] = [
    "JANUARY", "FEBRUARY", "MARCH", "APRIL", "MAY", "JUNE",
    "JULY", "AUGUST", "SEPTEMBER", "OCTOBER", "NOVEMBER", "DECEMBER",
];

/// A `(year, month)` bucket. The month is validated at construction and stays
/// in `1..=12` for the lifetime of the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, ServiceError> {
        if !(1..=12).contains(&month) {
            return Err(ServiceError::invalid_input(format!("month value out of range: {month}")));
        }
        Ok(Self { year, month })
    }

    pub fn year(self) -> i32 { self.year }

    pub fn month(self) -> u32 { self.month }

    /// The following calendar month, rolling the year at December.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("month validated at construction")
    }

    pub fn last_day(self) -> NaiveDate {
        let day = last_day_of_month(self.year, self.month);
        NaiveDate::from_ymd_opt(self.year, self.month, day).expect("month validated at construction")
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ServiceError::invalid_input(format!("invalid month: expected YYYY-MM, got {s}"));
        let (year, month) = s.split_once('-').ok_or_else(malformed)?;
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        Self::new(year, month)
    }
}

/// Full upper-case English month name for a month value in `1..=12`.
pub fn month_name(month: u32) -> Result<&'static str, ServiceError> {
    match month {
        1..=12 => Ok(MONTH_NAMES[(month - 1) as usize]),
        _ => Err(ServiceError::invalid_input(format!("month value out of range: {month}"))),
    }
}

/// Gregorian rule: divisible by 4, not by 100 unless by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Every month in the inclusive `[start, end]` range, ascending.
pub fn enumerate_months(start: YearMonth, end: YearMonth) -> Result<Vec<YearMonth>, ServiceError> {
    if start > end {
        return Err(ServiceError::invalid_range(format!("start month {start} is after end month {end}")));
    }
    let mut months = Vec::new();
    let mut current = start;
    loop {
        months.push(current);
        if current == end {
            break;
        }
        current = current.next();
    }
    Ok(months)
}

/// Every day in the inclusive `[start, end]` range, ascending.
pub fn enumerate_days(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>, ServiceError> {
    if start > end {
        return Err(ServiceError::invalid_range(format!("start date {start} is after end date {end}")));
    }
    let mut days = Vec::new();
    let mut current = start;
    loop {
        days.push(current);
        if current == end {
            break;
        }
        current = current.succ_opt().expect("day before end has a successor");
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).expect("test month")
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("test date")
    }

    #[test]
    fn months_roll_over_year_boundary() {
        let months = enumerate_months(ym(2023, 11), ym(2024, 2)).unwrap();
        assert_eq!(months, vec![ym(2023, 11), ym(2023, 12), ym(2024, 1), ym(2024, 2)]);
    }

    #[test]
    fn month_count_matches_formula() {
        let (start, end) = (ym(2022, 5), ym(2024, 3));
        let months = enumerate_months(start, end).unwrap();
        let expected = (end.year() * 12 + end.month() as i32) - (start.year() * 12 + start.month() as i32) + 1;
        assert_eq!(months.len() as i32, expected);
        assert!(months.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn single_month_range() {
        assert_eq!(enumerate_months(ym(2024, 7), ym(2024, 7)).unwrap(), vec![ym(2024, 7)]);
    }

    #[test]
    fn inverted_month_range_is_rejected() {
        let err = enumerate_months(ym(2024, 3), ym(2024, 2)).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidRange(_)));
    }

    #[test]
    fn days_step_across_leap_day() {
        let days = enumerate_days(date("2024-02-27"), date("2024-03-01")).unwrap();
        assert_eq!(
            days,
            vec![date("2024-02-27"), date("2024-02-28"), date("2024-02-29"), date("2024-03-01")]
        );
    }

    #[test]
    fn days_are_contiguous_and_inclusive() {
        let (start, end) = (date("2023-12-28"), date("2024-01-03"));
        let days = enumerate_days(start, end).unwrap();
        assert_eq!(days.len() as i64, (end - start).num_days() + 1);
        assert!(days.windows(2).all(|w| w[1] == w[0].succ_opt().unwrap()));
    }

    #[test]
    fn single_day_range() {
        let d = date("2024-06-15");
        assert_eq!(enumerate_days(d, d).unwrap(), vec![d]);
    }

    #[test]
    fn inverted_day_range_is_rejected() {
        let err = enumerate_days(date("2024-01-02"), date("2024-01-01")).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidRange(_)));
    }

    #[test]
    fn month_names_are_upper_case_english() {
        assert_eq!(month_name(1).unwrap(), "JANUARY");
        assert_eq!(month_name(12).unwrap(), "DECEMBER");
        assert!(matches!(month_name(0), Err(ServiceError::InvalidInput(_))));
        assert!(matches!(month_name(13), Err(ServiceError::InvalidInput(_))));
    }

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(last_day_of_month(2024, 2), 29);
        assert_eq!(last_day_of_month(2023, 2), 28);
        assert_eq!(last_day_of_month(2024, 4), 30);
        assert_eq!(last_day_of_month(2024, 12), 31);
    }

    #[test]
    fn parses_year_month_strings() {
        assert_eq!("2024-02".parse::<YearMonth>().unwrap(), ym(2024, 2));
        assert!(matches!("2024-13".parse::<YearMonth>(), Err(ServiceError::InvalidInput(_))));
        assert!(matches!("2024".parse::<YearMonth>(), Err(ServiceError::InvalidInput(_))));
        assert!(matches!("garbage-month".parse::<YearMonth>(), Err(ServiceError::InvalidInput(_))));
    }
}

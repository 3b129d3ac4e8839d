//! Calendar span calculation.
//!
//! This module decomposes an employment period into whole years, months and
//! days. Chrono has no year/month/day difference, so the borrowing rules are
//! implemented here: a negative day count borrows the length of the month
//! preceding the end date, and a negative month count borrows a year.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::EmploymentSpan;

/// Computes the calendar span between two dates.
///
/// # Arguments
///
/// * `start` - The admission date
/// * `end` - The termination date
///
/// # Returns
///
/// Returns the [`EmploymentSpan`] for the interval, or `InvalidDateRange`
/// if `end` is before `start`.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::compute_span;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// let span = compute_span(start, end).unwrap();
///
/// assert_eq!((span.years, span.months, span.days), (1, 0, 29));
/// assert_eq!(span.total_months, 12);
/// ```
pub fn compute_span(start: NaiveDate, end: NaiveDate) -> EngineResult<EmploymentSpan> {
    if end < start {
        return Err(EngineError::InvalidDateRange {
            start: Some(start),
            end: Some(end),
            message: format!("end date {} is before start date {}", end, start),
        });
    }

    let mut years = end.year() - start.year();
    let mut months = end.month() as i32 - start.month() as i32;
    let mut days = end.day() as i32 - start.day() as i32;

    if days < 0 {
        months -= 1;
        let (prev_year, prev_month) = if end.month() == 1 {
            (end.year() - 1, 12)
        } else {
            (end.year(), end.month() - 1)
        };
        let borrowed =
            days_in_month(prev_year, prev_month).ok_or_else(|| EngineError::InvalidDateRange {
                start: Some(start),
                end: Some(end),
                message: format!("month {} of {} does not exist", prev_month, prev_year),
            })?;
        days += borrowed as i32;
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    Ok(EmploymentSpan {
        start_date: start,
        end_date: end,
        years,
        months,
        days,
        total_months: years * 12 + months,
    })
}

/// Returns the number of days in a month of the Gregorian calendar, or
/// `None` if `month` is not in `1..=12`.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), Some(29));
/// assert_eq!(days_in_month(2023, 2), Some(28));
/// assert_eq!(days_in_month(1900, 2), Some(28));
/// assert_eq!(days_in_month(2000, 2), Some(29));
/// assert_eq!(days_in_month(2024, 13), None);
/// ```
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

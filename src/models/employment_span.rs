//! Employment span model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The calendar decomposition of an employment period.
///
/// Produced by [`compute_span`](crate::calculation::compute_span); `years`,
/// `months` and `days` follow "age in years, months and days" arithmetic,
/// borrowing days from the month preceding the end date.
///
/// `days` is signed: when the start day is later than the length of the
/// month before the end month, the borrow leaves a negative remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmploymentSpan {
    /// First day of employment (admission date).
    pub start_date: NaiveDate,
    /// Last day of employment (termination date).
    pub end_date: NaiveDate,
    /// Whole years of service.
    pub years: i32,
    /// Whole months beyond `years`.
    pub months: i32,
    /// Days beyond `months`.
    pub days: i32,
    /// `years * 12 + months`.
    pub total_months: i32,
}

impl EmploymentSpan {
    /// Completed years of service, derived from `total_months`.
    pub fn completed_years(&self) -> i32 {
        self.total_months.div_euclid(12)
    }

    /// Returns true if start and end fall on the same day.
    pub fn is_empty(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(years: i32, months: i32, days: i32) -> EmploymentSpan {
        EmploymentSpan {
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            years,
            months,
            days,
            total_months: years * 12 + months,
        }
    }

    #[test]
    fn test_completed_years_floors_total_months() {
        assert_eq!(span(0, 11, 29).completed_years(), 0);
        assert_eq!(span(1, 0, 0).completed_years(), 1);
        assert_eq!(span(7, 11, 0).completed_years(), 7);
    }

    #[test]
    fn test_is_empty_only_for_zero_span() {
        assert!(span(0, 0, 0).is_empty());
        assert!(!span(0, 0, 1).is_empty());
    }

    #[test]
    fn test_serializes_dates_as_iso() {
        let json = serde_json::to_string(&span(0, 0, 0)).unwrap();
        assert!(json.contains("\"start_date\":\"2020-01-01\""));
        assert!(json.contains("\"total_months\":0"));
    }
}

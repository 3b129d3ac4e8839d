//! Rescission request model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CompensationProfile, TerminationType};

/// The full input to one severance calculation.
///
/// Dates are optional because the calculator form may submit them blank;
/// a missing date is reported as an invalid date range during validation.
///
/// # Example
///
/// ```
/// use severance_engine::models::{CompensationProfile, RescissionRequest, TerminationType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = RescissionRequest::new(
///     TerminationType::WithoutCause,
///     CompensationProfile::with_base_salary(Decimal::from(3000)),
///     NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
/// )
/// .with_severance_fund_balance(Decimal::from(2880));
///
/// assert_eq!(request.accrued_vacation_days, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RescissionRequest {
    /// How the contract ended.
    pub termination_type: TerminationType,
    /// The monthly compensation base.
    pub compensation: CompensationProfile,
    /// Admission date.
    pub start_date: Option<NaiveDate>,
    /// Termination date.
    pub end_date: Option<NaiveDate>,
    /// Vested vacation days not yet taken.
    #[serde(default)]
    pub accrued_vacation_days: Option<i32>,
    /// Balance of the employee's severance fund (FGTS) account.
    #[serde(default)]
    pub severance_fund_balance: Decimal,
}

impl RescissionRequest {
    /// Creates a request with both dates, no accrued vacation and a zero
    /// fund balance.
    pub fn new(
        termination_type: TerminationType,
        compensation: CompensationProfile,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            termination_type,
            compensation,
            start_date: Some(start_date),
            end_date: Some(end_date),
            accrued_vacation_days: None,
            severance_fund_balance: Decimal::ZERO,
        }
    }

    /// Sets the number of accrued vacation days.
    pub fn with_accrued_vacation_days(mut self, days: i32) -> Self {
        self.accrued_vacation_days = Some(days);
        self
    }

    /// Sets the severance fund balance.
    pub fn with_severance_fund_balance(mut self, balance: Decimal) -> Self {
        self.severance_fund_balance = balance;
        self
    }
}

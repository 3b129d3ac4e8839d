//! Rescission request validation.
//!
//! Preconditions are checked in a fixed order and the first failure is
//! reported; nothing is computed for an invalid request.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::StatutoryRules;
use crate::error::{EngineError, EngineResult};
use crate::models::RescissionRequest;

/// Largest amount accepted for any compensation component or the fund
/// balance. Keeps every entitlement product well inside `Decimal` range.
pub const MAX_MONETARY_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Validates a request and returns its admission and termination dates.
///
/// Checks, in order:
/// 1. base salary is greater than zero
/// 2. both dates are present and the end date is not before the start date
/// 3. accrued vacation days, if provided, are within `[0, max_accrued_days]`
/// 4. every compensation component and the fund balance is within
///    `[0, MAX_MONETARY_AMOUNT]`
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::validate_request;
/// use severance_engine::config::StatutoryRules;
/// use severance_engine::error::EngineError;
/// use severance_engine::models::{CompensationProfile, RescissionRequest, TerminationType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = RescissionRequest::new(
///     TerminationType::WithoutCause,
///     CompensationProfile::with_base_salary(Decimal::from(3000)),
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
/// );
///
/// let result = validate_request(&request, &StatutoryRules::default());
/// assert!(matches!(result, Err(EngineError::InvalidDateRange { .. })));
/// ```
pub fn validate_request(
    request: &RescissionRequest,
    rules: &StatutoryRules,
) -> EngineResult<(NaiveDate, NaiveDate)> {
    let base_salary = request.compensation.base_salary;
    if base_salary <= Decimal::ZERO {
        return Err(EngineError::InvalidSalary { value: base_salary });
    }

    let (start, end) = match (request.start_date, request.end_date) {
        (Some(start), Some(end)) => (start, end),
        (start, end) => {
            return Err(EngineError::InvalidDateRange {
                start,
                end,
                message: "both admission and termination dates are required".to_string(),
            });
        }
    };
    if end < start {
        return Err(EngineError::InvalidDateRange {
            start: Some(start),
            end: Some(end),
            message: format!("end date {} is before start date {}", end, start),
        });
    }

    if let Some(days) = request.accrued_vacation_days {
        let max = rules.vacation.max_accrued_days;
        if days < 0 || days as u32 > max {
            return Err(EngineError::InvalidVacationDays { days, max });
        }
    }

    let monetary_fields = request
        .compensation
        .fields()
        .into_iter()
        .chain([("severance_fund_balance", request.severance_fund_balance)]);
    for (field, value) in monetary_fields {
        if value < Decimal::ZERO || value > MAX_MONETARY_AMOUNT {
            return Err(EngineError::InvalidMonetaryField {
                field: field.to_string(),
                value,
                max: MAX_MONETARY_AMOUNT,
            });
        }
    }

    Ok((start, end))
}

//! Calculator form collection.
//!
//! The calculator page submits every field as free text. Coercion is
//! lenient: numbers are read from their leading numeric prefix, anything
//! blank or unreadable becomes zero, amounts too large for `Decimal`
//! saturate, and blank or malformed dates become missing so validation can
//! report them.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{CompensationProfile, RescissionRequest, TerminationType};

/// The raw calculator form, exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RescissionForm {
    /// Termination code (`semJustaCausa`, `pedidoDemissao`, `acordo`).
    pub termination_type: String,
    /// Base monthly salary.
    pub salary: String,
    /// Average monthly overtime pay.
    pub average_overtime_pay: String,
    /// Average monthly commissions.
    pub average_commissions: String,
    /// Other habitual allowances.
    pub other_allowances: String,
    /// Admission date, `YYYY-MM-DD`.
    pub start_date: String,
    /// Termination date, `YYYY-MM-DD`.
    pub end_date: String,
    /// Vested vacation days not yet taken.
    pub accrued_vacation_days: String,
    /// Severance fund (FGTS) balance.
    pub severance_fund_balance: String,
}

impl RescissionForm {
    /// Coerces the form into a [`RescissionRequest`].
    ///
    /// Only an unrecognised termination code fails here; every other
    /// problem is left for validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use severance_engine::models::TerminationType;
    /// use severance_engine::presentation::RescissionForm;
    /// use rust_decimal::Decimal;
    ///
    /// let form = RescissionForm {
    ///     termination_type: "acordo".to_string(),
    ///     salary: "3000,50".to_string(),
    ///     start_date: "2023-01-10".to_string(),
    ///     end_date: "".to_string(),
    ///     ..Default::default()
    /// };
    ///
    /// let request = form.to_request().unwrap();
    /// assert_eq!(request.termination_type, TerminationType::MutualAgreement);
    /// assert_eq!(request.compensation.base_salary, Decimal::new(300050, 2));
    /// assert!(request.end_date.is_none());
    /// ```
    pub fn to_request(&self) -> EngineResult<RescissionRequest> {
        let termination_type = if self.termination_type.trim().is_empty() {
            TerminationType::WithoutCause
        } else {
            self.termination_type.parse()?
        };

        let compensation = CompensationProfile {
            base_salary: parse_amount(&self.salary),
            average_overtime_pay: parse_amount(&self.average_overtime_pay),
            average_commissions: parse_amount(&self.average_commissions),
            other_allowances: parse_amount(&self.other_allowances),
        };

        Ok(RescissionRequest {
            termination_type,
            compensation,
            start_date: parse_date(&self.start_date),
            end_date: parse_date(&self.end_date),
            accrued_vacation_days: Some(parse_days(&self.accrued_vacation_days)),
            severance_fund_balance: parse_amount(&self.severance_fund_balance),
        })
    }
}

/// Reads a monetary amount from the leading numeric prefix of `raw`.
///
/// A comma is read as the decimal separator; when one is present, `.` is
/// treated as a thousands separator (`1.234,56`). Blank or unreadable input
/// is zero. A number too large for `Decimal` saturates to `Decimal::MAX` or
/// `Decimal::MIN`, and fraction digits beyond its precision are dropped.
///
/// # Examples
///
/// ```
/// use severance_engine::presentation::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("1500.75"), Decimal::new(150075, 2));
/// assert_eq!(parse_amount("1.234,56"), Decimal::new(123456, 2));
/// assert_eq!(parse_amount("250abc"), Decimal::from(250));
/// assert_eq!(parse_amount(""), Decimal::ZERO);
/// assert_eq!(parse_amount("100000000000000000000000000000"), Decimal::MAX);
/// ```
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    let normalized = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    };

    numeric_prefix(&normalized, true)
        .map(|prefix| saturating_decimal(&prefix))
        .unwrap_or(Decimal::ZERO)
}

/// Parses a numeric prefix that `Decimal::from_str` may reject for size.
fn saturating_decimal(prefix: &str) -> Decimal {
    if let Ok(value) = Decimal::from_str(prefix) {
        return value;
    }

    let negative = prefix.starts_with('-');
    let unsigned = prefix.trim_start_matches('-');
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let whole = whole.trim_start_matches('0');

    // Any 28-digit integer fits; keep only the fraction digits that do too.
    if whole.len() <= 28 {
        let kept = &fraction[..fraction.len().min(28 - whole.len())];
        let sign = if negative { "-" } else { "" };
        let whole = if whole.is_empty() { "0" } else { whole };
        let truncated = if kept.is_empty() {
            format!("{sign}{whole}")
        } else {
            format!("{sign}{whole}.{kept}")
        };
        if let Ok(value) = Decimal::from_str(&truncated) {
            return value;
        }
    }

    if negative { Decimal::MIN } else { Decimal::MAX }
}

/// Reads a whole number of days from the leading integer prefix of `raw`.
///
/// Blank or unreadable input is zero; values beyond `i32` saturate.
pub fn parse_days(raw: &str) -> i32 {
    numeric_prefix(raw.trim(), false)
        .and_then(|prefix| prefix.parse::<i64>().ok())
        .map(|days| days.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
        .unwrap_or(0)
}

/// Reads an ISO `YYYY-MM-DD` date; anything else is missing.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Extracts `[+-]digits[.digits]` from the start of `input`.
///
/// Returns `None` if no digit is found. A bare leading `.` gets a `0`.
fn numeric_prefix(input: &str, allow_fraction: bool) -> Option<String> {
    let mut chars = input.chars().peekable();
    let mut prefix = String::new();

    if let Some(&sign @ ('-' | '+')) = chars.peek() {
        if sign == '-' {
            prefix.push('-');
        }
        chars.next();
    }

    let mut whole = String::new();
    while let Some(&ch) = chars.peek() {
        if !ch.is_ascii_digit() {
            break;
        }
        whole.push(ch);
        chars.next();
    }

    let mut fraction = String::new();
    if allow_fraction && chars.peek() == Some(&'.') {
        chars.next();
        while let Some(&ch) = chars.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            fraction.push(ch);
            chars.next();
        }
    }

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    if whole.is_empty() {
        whole.push('0');
    }
    prefix.push_str(&whole);
    if !fraction.is_empty() {
        prefix.push('.');
        prefix.push_str(&fraction);
    }

    Some(prefix)
}

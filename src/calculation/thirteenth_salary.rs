//! Proportional 13th salary calculation functionality.
//!
//! The year-end bonus is paid in twelfths: one twelfth of the integrated
//! salary per month in the final period, where a partial month counts once
//! at least half of it (15 days) has elapsed.

use rust_decimal::Decimal;

use crate::config::StatutoryRules;
use crate::models::{AuditStep, EmploymentSpan, EntitlementKind, EntitlementLine};

use super::money::monthly_share;

/// The label shown for the proportional 13th salary.
pub const THIRTEENTH_SALARY_LABEL: &str = "13º Salário Proporcional";

/// The result of calculating the proportional 13th salary.
#[derive(Debug, Clone)]
pub struct ThirteenthSalaryResult {
    /// The 13th salary line (may be zero).
    pub line: EntitlementLine,
    /// The months the bonus was prorated over.
    pub months: i32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the number of months an entitlement is prorated over.
///
/// The span's `months` component, plus one if the remaining days reach the
/// half-month threshold. Whole years are not counted: they were settled at
/// each year end.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::{compute_span, prorated_months};
/// use severance_engine::config::StatutoryRules;
/// use chrono::NaiveDate;
///
/// let rules = StatutoryRules::default();
/// let span = compute_span(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 4, 16).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(prorated_months(&span, &rules), 4);
/// ```
pub fn prorated_months(span: &EmploymentSpan, rules: &StatutoryRules) -> i32 {
    let threshold = rules.proration.half_month_threshold_days as i32;
    span.months + i32::from(span.days >= threshold)
}

/// Calculates the proportional 13th salary.
///
/// # Arguments
///
/// * `integrated_salary` - The integrated monthly salary
/// * `span` - The employment span
/// * `rules` - The statutory rule set
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::{calculate_thirteenth_salary, compute_span};
/// use severance_engine::config::StatutoryRules;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let span = compute_span(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 4, 16).unwrap(),
/// )
/// .unwrap();
///
/// let result = calculate_thirteenth_salary(Decimal::from(3000), &span, &StatutoryRules::default(), 1);
/// assert_eq!(result.line.amount, Decimal::from(1000));
/// ```
pub fn calculate_thirteenth_salary(
    integrated_salary: Decimal,
    span: &EmploymentSpan,
    rules: &StatutoryRules,
    step_number: u32,
) -> ThirteenthSalaryResult {
    let months = prorated_months(span, rules);
    let share = monthly_share(integrated_salary, rules);
    let amount = share * Decimal::from(months);

    let audit_step = AuditStep {
        step_number,
        rule_id: "thirteenth_salary".to_string(),
        rule_name: "Proportional 13th Salary".to_string(),
        legal_ref: rules.proration.legal_ref.clone(),
        input: serde_json::json!({
            "integrated_salary": integrated_salary.normalize().to_string(),
            "months": span.months,
            "days": span.days,
            "half_month_threshold_days": rules.proration.half_month_threshold_days
        }),
        output: serde_json::json!({
            "prorated_months": months,
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} / {} x {} months = {}",
            integrated_salary.normalize(),
            rules.proration.months_per_year,
            months,
            amount.round_dp(2)
        ),
    };

    ThirteenthSalaryResult {
        line: EntitlementLine {
            kind: EntitlementKind::ProportionalThirteenth,
            label: THIRTEENTH_SALARY_LABEL.to_string(),
            amount,
        },
        months,
        audit_step,
    }
}

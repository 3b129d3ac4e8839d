//! Salary balance calculation functionality.
//!
//! The salary balance pays the days worked in the final, incomplete month at
//! the flat commercial-month daily rate, regardless of the real length of the
//! calendar month.

use rust_decimal::Decimal;

use crate::config::StatutoryRules;
use crate::models::{AuditStep, EmploymentSpan, EntitlementKind, EntitlementLine};

use super::money::daily_rate;

/// The label shown for the salary balance.
pub const SALARY_BALANCE_LABEL: &str = "Saldo de Salário";

/// The result of calculating the salary balance, including the line and audit step.
#[derive(Debug, Clone)]
pub struct SalaryBalanceResult {
    /// The salary balance line (may be zero).
    pub line: EntitlementLine,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the salary balance for the days of the final partial month.
///
/// # Arguments
///
/// * `integrated_salary` - The integrated monthly salary
/// * `span` - The employment span; its `days` component is paid
/// * `rules` - The statutory rule set
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::{calculate_salary_balance, compute_span};
/// use severance_engine::config::StatutoryRules;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let span = compute_span(
///     NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 5, 13).unwrap(),
/// )
/// .unwrap();
///
/// let result = calculate_salary_balance(Decimal::from(3000), &span, &StatutoryRules::default(), 1);
/// assert_eq!(result.line.amount, Decimal::from(1200));
/// ```
pub fn calculate_salary_balance(
    integrated_salary: Decimal,
    span: &EmploymentSpan,
    rules: &StatutoryRules,
    step_number: u32,
) -> SalaryBalanceResult {
    let daily = daily_rate(integrated_salary, rules);
    let amount = daily * Decimal::from(span.days);

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_balance".to_string(),
        rule_name: "Salary Balance".to_string(),
        legal_ref: rules.salary_balance_ref.clone(),
        input: serde_json::json!({
            "integrated_salary": integrated_salary.normalize().to_string(),
            "commercial_month_days": rules.commercial_month_days,
            "days": span.days
        }),
        output: serde_json::json!({
            "daily_rate": daily.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} / {} x {} days = {}",
            integrated_salary.normalize(),
            rules.commercial_month_days,
            span.days,
            amount.round_dp(2)
        ),
    };

    SalaryBalanceResult {
        line: EntitlementLine {
            kind: EntitlementKind::SalaryBalance,
            label: SALARY_BALANCE_LABEL.to_string(),
            amount,
        },
        audit_step,
    }
}

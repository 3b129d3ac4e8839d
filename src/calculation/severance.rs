//! Severance computation entry point.
//!
//! [`compute_severance`] validates a request, decomposes the employment
//! span and applies every entitlement rule in presentation order. The
//! computation is pure: identical requests always produce identical results.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::StatutoryRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, EntitlementLine, RescissionRequest, RescissionResult,
};

use super::date_span::compute_span;
use super::notice_indemnity::calculate_notice_indemnity;
use super::salary_balance::calculate_salary_balance;
use super::severance_fund::{calculate_fund_penalty, calculate_monthly_fund_deposit};
use super::thirteenth_salary::calculate_thirteenth_salary;
use super::validation::{MAX_MONETARY_AMOUNT, validate_request};
use super::vacation::{calculate_accrued_vacation, calculate_proportional_vacation};

/// Computes every severance entitlement for a termination.
///
/// # Arguments
///
/// * `request` - The termination scenario
/// * `rules` - The statutory rule set
///
/// # Returns
///
/// Returns the complete [`RescissionResult`], `InvalidConfig` if the rule
/// set is unusable, or the first validation failure. No partial result is
/// ever produced.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::compute_severance;
/// use severance_engine::config::StatutoryRules;
/// use severance_engine::models::{
///     CompensationProfile, EntitlementKind, RescissionRequest, TerminationType,
/// };
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
/// let result = compute_severance(&request, &StatutoryRules::default()).unwrap();
///
/// assert_eq!(result.payable_amount(EntitlementKind::NoticeIndemnity), Some(Decimal::from(3300)));
/// assert_eq!(result.payable_amount(EntitlementKind::FundPenalty), Some(Decimal::from(1152)));
/// assert_eq!(result.payable_amount(EntitlementKind::MonthlyFundDeposit), Some(Decimal::from(240)));
/// assert_eq!(result.payable_amount(EntitlementKind::SalaryBalance), None);
/// assert_eq!(result.total, Decimal::from(4692));
/// ```
pub fn compute_severance(
    request: &RescissionRequest,
    rules: &StatutoryRules,
) -> EngineResult<RescissionResult> {
    rules.validate()?;
    let (start, end) = validate_request(request, rules)?;
    let span = compute_span(start, end)?;
    let termination_type = request.termination_type;
    let integrated_salary =
        request
            .compensation
            .integrated_salary()
            .ok_or_else(|| EngineError::InvalidMonetaryField {
                field: "integrated_salary".to_string(),
                value: request.compensation.base_salary,
                max: MAX_MONETARY_AMOUNT,
            })?;

    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut lines: Vec<EntitlementLine> = Vec::new();

    steps.push(AuditStep {
        step_number: 1,
        rule_id: "integrated_salary".to_string(),
        rule_name: "Integrated Salary".to_string(),
        legal_ref: "CLT art. 457 §1º".to_string(),
        input: serde_json::json!({
            "base_salary": request.compensation.base_salary.normalize().to_string(),
            "average_overtime_pay": request.compensation.average_overtime_pay.normalize().to_string(),
            "average_commissions": request.compensation.average_commissions.normalize().to_string(),
            "other_allowances": request.compensation.other_allowances.normalize().to_string()
        }),
        output: serde_json::json!({
            "integrated_salary": integrated_salary.normalize().to_string(),
            "years": span.years,
            "months": span.months,
            "days": span.days,
            "total_months": span.total_months
        }),
        reasoning: format!(
            "Integrated salary {} over {} years, {} months and {} days of service",
            integrated_salary.normalize(),
            span.years,
            span.months,
            span.days
        ),
    });

    if span.days < 0 {
        warn!(
            start_date = %start,
            end_date = %end,
            days = span.days,
            "Day borrow left a negative balance"
        );
        warnings.push(AuditWarning {
            code: "NEGATIVE_DAY_BALANCE".to_string(),
            message: format!(
                "Start day {} is later than the length of the month before {}; {} days remain",
                start.format("%d"),
                end,
                span.days
            ),
            severity: "medium".to_string(),
        });
    }

    let salary_balance = calculate_salary_balance(integrated_salary, &span, rules, 2);
    lines.push(salary_balance.line);
    steps.push(salary_balance.audit_step);

    let notice = calculate_notice_indemnity(termination_type, integrated_salary, &span, rules, 3);
    lines.extend(notice.line);
    steps.push(notice.audit_step);

    let thirteenth = calculate_thirteenth_salary(integrated_salary, &span, rules, 4);
    lines.push(thirteenth.line);
    steps.push(thirteenth.audit_step);

    let proportional_vacation = calculate_proportional_vacation(integrated_salary, &span, rules, 5);
    lines.extend(proportional_vacation.line);
    steps.push(proportional_vacation.audit_step);

    let accrued_vacation =
        calculate_accrued_vacation(integrated_salary, request.accrued_vacation_days, rules, 6);
    lines.extend(accrued_vacation.line);
    steps.push(accrued_vacation.audit_step);

    let penalty = calculate_fund_penalty(termination_type, request.severance_fund_balance, rules, 7);
    lines.extend(penalty.line);
    steps.push(penalty.audit_step);

    let deposit = calculate_monthly_fund_deposit(termination_type, integrated_salary, rules, 8);
    lines.extend(deposit.line);
    steps.push(deposit.audit_step);

    for line in &lines {
        debug!(
            kind = ?line.kind,
            amount = %line.amount.normalize(),
            payable = line.is_payable(),
            "Computed entitlement"
        );
    }

    let result = RescissionResult::from_lines(
        termination_type,
        span,
        integrated_salary,
        lines,
        AuditTrace { steps, warnings },
    );

    debug!(
        termination_type = %termination_type,
        total = %result.total.normalize(),
        "Severance computed"
    );

    Ok(result)
}

/// Sums the payable amounts of a set of lines.
///
/// Equal to [`RescissionResult::total`] for the lines of a result.
pub fn payable_total<'a>(lines: impl IntoIterator<Item = &'a EntitlementLine>) -> Decimal {
    lines
        .into_iter()
        .filter(|line| line.is_payable())
        .map(|line| line.amount)
        .sum()
}

//! Vacation pay calculation functionality.
//!
//! Two vacation entitlements exist on termination: proportional vacation for
//! the current accrual period, prorated in twelfths like the 13th salary, and
//! accrued vacation for vested days not yet taken. Both carry the one-third
//! constitutional bonus.

use rust_decimal::Decimal;

use crate::config::StatutoryRules;
use crate::models::{AuditStep, EmploymentSpan, EntitlementKind, EntitlementLine};

use super::money::{daily_rate, monthly_share, with_vacation_bonus};
use super::thirteenth_salary::prorated_months;

/// The label shown for proportional vacation.
pub const PROPORTIONAL_VACATION_LABEL: &str = "Férias Proporcionais + 1/3";

/// The label shown for accrued vacation.
pub const ACCRUED_VACATION_LABEL: &str = "Férias Vencidas + 1/3";

/// The result of calculating a vacation entitlement.
#[derive(Debug, Clone)]
pub struct VacationResult {
    /// The vacation line, if the entitlement applies.
    pub line: Option<EntitlementLine>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates proportional vacation plus the one-third bonus.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::{calculate_proportional_vacation, compute_span};
/// use severance_engine::config::StatutoryRules;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let span = compute_span(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
/// )
/// .unwrap();
///
/// let result = calculate_proportional_vacation(Decimal::from(3000), &span, &StatutoryRules::default(), 1);
/// // 3000 / 12 x 6 = 1500, plus one third = 2000
/// assert_eq!(result.line.unwrap().amount, Decimal::from(2000));
/// ```
pub fn calculate_proportional_vacation(
    integrated_salary: Decimal,
    span: &EmploymentSpan,
    rules: &StatutoryRules,
    step_number: u32,
) -> VacationResult {
    let months = prorated_months(span, rules);
    let base = monthly_share(integrated_salary, rules) * Decimal::from(months);
    let amount = with_vacation_bonus(base, rules);

    let audit_step = AuditStep {
        step_number,
        rule_id: "proportional_vacation".to_string(),
        rule_name: "Proportional Vacation".to_string(),
        legal_ref: rules.vacation.legal_ref.clone(),
        input: serde_json::json!({
            "integrated_salary": integrated_salary.normalize().to_string(),
            "months": span.months,
            "days": span.days
        }),
        output: serde_json::json!({
            "prorated_months": months,
            "base": base.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} / {} x {} months = {}, plus 1/{} bonus = {}",
            integrated_salary.normalize(),
            rules.proration.months_per_year,
            months,
            base.round_dp(2),
            rules.vacation.bonus_divisor,
            amount.round_dp(2)
        ),
    };

    VacationResult {
        line: Some(EntitlementLine {
            kind: EntitlementKind::ProportionalVacation,
            label: PROPORTIONAL_VACATION_LABEL.to_string(),
            amount,
        }),
        audit_step,
    }
}

/// Calculates accrued (vested) vacation plus the one-third bonus.
///
/// No line is produced when there are no accrued days.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::calculate_accrued_vacation;
/// use severance_engine::config::StatutoryRules;
/// use rust_decimal::Decimal;
///
/// let rules = StatutoryRules::default();
///
/// let result = calculate_accrued_vacation(Decimal::from(3000), Some(30), &rules, 1);
/// assert_eq!(result.line.unwrap().amount, Decimal::from(4000));
///
/// let result = calculate_accrued_vacation(Decimal::from(3000), None, &rules, 1);
/// assert!(result.line.is_none());
/// ```
pub fn calculate_accrued_vacation(
    integrated_salary: Decimal,
    accrued_days: Option<i32>,
    rules: &StatutoryRules,
    step_number: u32,
) -> VacationResult {
    let days = accrued_days.unwrap_or(0);

    if days <= 0 {
        let audit_step = AuditStep {
            step_number,
            rule_id: "accrued_vacation".to_string(),
            rule_name: "Accrued Vacation".to_string(),
            legal_ref: rules.vacation.legal_ref.clone(),
            input: serde_json::json!({
                "accrued_days": days
            }),
            output: serde_json::json!({
                "owed": false
            }),
            reasoning: "No accrued vacation days reported".to_string(),
        };

        return VacationResult {
            line: None,
            audit_step,
        };
    }

    let base = daily_rate(integrated_salary, rules) * Decimal::from(days);
    let amount = with_vacation_bonus(base, rules);

    let audit_step = AuditStep {
        step_number,
        rule_id: "accrued_vacation".to_string(),
        rule_name: "Accrued Vacation".to_string(),
        legal_ref: rules.vacation.legal_ref.clone(),
        input: serde_json::json!({
            "integrated_salary": integrated_salary.normalize().to_string(),
            "accrued_days": days
        }),
        output: serde_json::json!({
            "base": base.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} / {} x {} days = {}, plus 1/{} bonus = {}",
            integrated_salary.normalize(),
            rules.commercial_month_days,
            days,
            base.round_dp(2),
            rules.vacation.bonus_divisor,
            amount.round_dp(2)
        ),
    };

    VacationResult {
        line: Some(EntitlementLine {
            kind: EntitlementKind::AccruedVacation,
            label: ACCRUED_VACATION_LABEL.to_string(),
            amount,
        }),
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn span(months: i32, days: i32) -> EmploymentSpan {
        EmploymentSpan {
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            years: 0,
            months,
            days,
            total_months: months,
        }
    }

    /// VC-001: proportional vacation uses the half-month rounding
    #[test]
    fn test_proportional_vacation_rounds_half_month() {
        let rules = StatutoryRules::default();
        let result = calculate_proportional_vacation(dec("1200"), &span(2, 15), &rules, 1);
        // 1200 / 12 x 3 = 300, plus 100
        assert_eq!(result.line.unwrap().amount, dec("400"));
    }

    /// VC-002: zero months gives a zero, non-payable line
    #[test]
    fn test_proportional_vacation_zero_months() {
        let rules = StatutoryRules::default();
        let line = calculate_proportional_vacation(dec("3000"), &span(0, 14), &rules, 1)
            .line
            .unwrap();
        assert_eq!(line.amount, Decimal::ZERO);
        assert!(!line.is_payable());
    }

    /// VC-003: accrued days at the daily rate plus one third
    #[test]
    fn test_accrued_vacation_amount() {
        let rules = StatutoryRules::default();
        let line = calculate_accrued_vacation(dec("4500"), Some(10), &rules, 1)
            .line
            .unwrap();
        // 4500 / 30 x 10 = 1500, plus 500
        assert_eq!(line.amount, dec("2000"));
        assert_eq!(line.kind, EntitlementKind::AccruedVacation);
        assert_eq!(line.label, "Férias Vencidas + 1/3");
    }

    /// VC-004: zero accrued days produce no line
    #[test]
    fn test_zero_accrued_days_have_no_line() {
        let rules = StatutoryRules::default();
        let result = calculate_accrued_vacation(dec("3000"), Some(0), &rules, 1);
        assert!(result.line.is_none());
        assert_eq!(result.audit_step.output["owed"].as_bool().unwrap(), false);
    }

    #[test]
    fn test_proportional_vacation_label() {
        let rules = StatutoryRules::default();
        let line = calculate_proportional_vacation(dec("3000"), &span(1, 0), &rules, 1)
            .line
            .unwrap();
        assert_eq!(line.label, "Férias Proporcionais + 1/3");
        assert_eq!(line.kind, EntitlementKind::ProportionalVacation);
    }

    #[test]
    fn test_bonus_keeps_full_precision() {
        let rules = StatutoryRules::default();
        let line = calculate_proportional_vacation(dec("1000"), &span(1, 0), &rules, 1)
            .line
            .unwrap();
        // 83.33... + 27.77... = 111.11...
        assert_eq!(line.amount.round_dp(2), dec("111.11"));
        assert!(line.amount.scale() > 2);
    }
}

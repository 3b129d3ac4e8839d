//! Rescission result models for the Severance Engine.
//!
//! This module contains the [`RescissionResult`] type and its associated
//! structures that capture all outputs from a severance calculation: the
//! entitlement lines, the total and an audit trace of every rule applied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EmploymentSpan, TerminationType};

/// The kind of entitlement a line represents.
///
/// Variants are declared in presentation order; lines in a result always
/// follow this order.
///
/// # Example
///
/// ```
/// use severance_engine::models::EntitlementKind;
///
/// let kind = EntitlementKind::ProportionalThirteenth;
/// assert_eq!(serde_json::to_string(&kind).unwrap(), "\"proportional_thirteenth\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntitlementKind {
    /// Salary for the days worked in the final, incomplete month.
    SalaryBalance,
    /// Payment in lieu of the statutory notice period.
    NoticeIndemnity,
    /// Proportional year-end bonus (13th salary).
    ProportionalThirteenth,
    /// Proportional vacation plus the one-third bonus.
    ProportionalVacation,
    /// Vested but untaken vacation plus the one-third bonus.
    AccruedVacation,
    /// Employer penalty over the severance fund balance.
    FundPenalty,
    /// Severance fund deposit for the current month.
    MonthlyFundDeposit,
}

/// A single named amount in a rescission result.
///
/// # Example
///
/// ```
/// use severance_engine::models::{EntitlementKind, EntitlementLine};
/// use rust_decimal::Decimal;
///
/// let line = EntitlementLine {
///     kind: EntitlementKind::MonthlyFundDeposit,
///     label: "FGTS do Mês (8%)".to_string(),
///     amount: Decimal::from(240),
/// };
/// assert!(line.is_payable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementLine {
    /// What the amount pays for.
    pub kind: EntitlementKind,
    /// The human-readable entitlement name shown to the employee.
    pub label: String,
    /// The unrounded amount in currency units.
    pub amount: Decimal,
}

impl EntitlementLine {
    /// Returns true if the amount is strictly positive and therefore shown
    /// and counted in the total.
    pub fn is_payable(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute backing this rule.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of a severance calculation.
///
/// `lines` holds every entitlement that applies to the termination type,
/// including lines that computed to zero. Only payable lines (strictly
/// positive) are shown and summed into `total`.
///
/// # Example
///
/// ```
/// use severance_engine::models::{
///     AuditTrace, EmploymentSpan, EntitlementKind, EntitlementLine, RescissionResult,
///     TerminationType,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let span = EmploymentSpan {
///     start_date: date,
///     end_date: date,
///     years: 0,
///     months: 0,
///     days: 0,
///     total_months: 0,
/// };
/// let result = RescissionResult::from_lines(
///     TerminationType::WithoutCause,
///     span,
///     Decimal::from(3000),
///     vec![
///         EntitlementLine {
///             kind: EntitlementKind::SalaryBalance,
///             label: "Saldo de Salário".to_string(),
///             amount: Decimal::ZERO,
///         },
///         EntitlementLine {
///             kind: EntitlementKind::MonthlyFundDeposit,
///             label: "FGTS do Mês (8%)".to_string(),
///             amount: Decimal::from(240),
///         },
///     ],
///     AuditTrace::default(),
/// );
///
/// assert_eq!(result.total, Decimal::from(240));
/// assert_eq!(result.payable_lines().count(), 1);
/// ```
///
/// Deserializing rebuilds the result through [`RescissionResult::from_lines`],
/// so an incoming `total` is ignored and recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RescissionResultFields")]
pub struct RescissionResult {
    /// How the contract ended.
    pub termination_type: TerminationType,
    /// The computed employment span.
    pub span: EmploymentSpan,
    /// The integrated monthly salary every entitlement was computed over.
    pub integrated_salary: Decimal,
    /// Every applicable entitlement line, in presentation order.
    pub lines: Vec<EntitlementLine>,
    /// Sum of all payable line amounts.
    pub total: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl RescissionResult {
    /// Builds a result, ordering the lines by kind and deriving the total
    /// from the payable lines.
    pub fn from_lines(
        termination_type: TerminationType,
        span: EmploymentSpan,
        integrated_salary: Decimal,
        mut lines: Vec<EntitlementLine>,
        audit_trace: AuditTrace,
    ) -> Self {
        lines.sort_by_key(|line| line.kind);
        let total = lines
            .iter()
            .filter(|line| line.is_payable())
            .map(|line| line.amount)
            .sum();

        Self {
            termination_type,
            span,
            integrated_salary,
            lines,
            total,
            audit_trace,
        }
    }

    /// Lines with a strictly positive amount, in presentation order.
    pub fn payable_lines(&self) -> impl Iterator<Item = &EntitlementLine> {
        self.lines.iter().filter(|line| line.is_payable())
    }

    /// Returns the line of the given kind, if the entitlement applies.
    pub fn line(&self, kind: EntitlementKind) -> Option<&EntitlementLine> {
        self.lines.iter().find(|line| line.kind == kind)
    }

    /// Returns the amount of the given kind if it is payable.
    pub fn payable_amount(&self, kind: EntitlementKind) -> Option<Decimal> {
        self.line(kind)
            .filter(|line| line.is_payable())
            .map(|line| line.amount)
    }
}

/// Serialized form of a result, without the derived total.
#[derive(Deserialize)]
struct RescissionResultFields {
    termination_type: TerminationType,
    span: EmploymentSpan,
    integrated_salary: Decimal,
    lines: Vec<EntitlementLine>,
    #[serde(default)]
    audit_trace: AuditTrace,
}

impl From<RescissionResultFields> for RescissionResult {
    fn from(fields: RescissionResultFields) -> Self {
        Self::from_lines(
            fields.termination_type,
            fields.span,
            fields.integrated_salary,
            fields.lines,
            fields.audit_trace,
        )
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

    fn sample_span() -> EmploymentSpan {
        EmploymentSpan {
            start_date: NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            years: 1,
            months: 0,
            days: 0,
            total_months: 12,
        }
    }

    fn line(kind: EntitlementKind, amount: &str) -> EntitlementLine {
        EntitlementLine {
            kind,
            label: format!("{:?}", kind),
            amount: dec(amount),
        }
    }

    /// RR-001: total equals sum of payable lines
    #[test]
    fn test_total_equals_sum_of_payable_lines() {
        let result = RescissionResult::from_lines(
            TerminationType::WithoutCause,
            sample_span(),
            dec("3000"),
            vec![
                line(EntitlementKind::NoticeIndemnity, "3300"),
                line(EntitlementKind::SalaryBalance, "0"),
                line(EntitlementKind::FundPenalty, "1152"),
                line(EntitlementKind::MonthlyFundDeposit, "240"),
            ],
            AuditTrace::default(),
        );

        assert_eq!(result.total, dec("4692"));
    }

    /// RR-002: negative amounts are excluded from the total
    #[test]
    fn test_negative_amounts_excluded_from_total() {
        let result = RescissionResult::from_lines(
            TerminationType::WithoutCause,
            sample_span(),
            dec("3000"),
            vec![
                line(EntitlementKind::SalaryBalance, "-200"),
                line(EntitlementKind::MonthlyFundDeposit, "240"),
            ],
            AuditTrace::default(),
        );

        assert_eq!(result.total, dec("240"));
        assert_eq!(result.payable_amount(EntitlementKind::SalaryBalance), None);
        assert!(result.line(EntitlementKind::SalaryBalance).is_some());
    }

    #[test]
    fn test_lines_are_sorted_into_presentation_order() {
        let result = RescissionResult::from_lines(
            TerminationType::WithoutCause,
            sample_span(),
            dec("3000"),
            vec![
                line(EntitlementKind::MonthlyFundDeposit, "240"),
                line(EntitlementKind::SalaryBalance, "100"),
                line(EntitlementKind::NoticeIndemnity, "3300"),
            ],
            AuditTrace::default(),
        );

        let kinds: Vec<EntitlementKind> = result.lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EntitlementKind::SalaryBalance,
                EntitlementKind::NoticeIndemnity,
                EntitlementKind::MonthlyFundDeposit,
            ]
        );
    }

    #[test]
    fn test_entitlement_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&EntitlementKind::SalaryBalance).unwrap(),
            "\"salary_balance\""
        );
        assert_eq!(
            serde_json::to_string(&EntitlementKind::MonthlyFundDeposit).unwrap(),
            "\"monthly_fund_deposit\""
        );
    }

    #[test]
    fn test_entitlement_line_serializes_amount_as_string() {
        let json = serde_json::to_string(&line(EntitlementKind::FundPenalty, "1152.00")).unwrap();
        assert!(json.contains("\"kind\":\"fund_penalty\""));
        assert!(json.contains("\"amount\":\"1152.00\""));
    }

    #[test]
    fn test_empty_result_has_zero_total() {
        let result = RescissionResult::from_lines(
            TerminationType::EmployeeResignation,
            sample_span(),
            dec("3000"),
            vec![],
            AuditTrace::default(),
        );
        assert_eq!(result.total, Decimal::ZERO);
        assert_eq!(result.payable_lines().count(), 0);
    }

    /// RR-003: a deserialized total is recomputed from the lines
    #[test]
    fn test_deserialized_total_is_recomputed() {
        let result = RescissionResult::from_lines(
            TerminationType::WithoutCause,
            sample_span(),
            dec("3000"),
            vec![
                line(EntitlementKind::NoticeIndemnity, "3300"),
                line(EntitlementKind::SalaryBalance, "-200"),
                line(EntitlementKind::FundPenalty, "1152"),
                line(EntitlementKind::MonthlyFundDeposit, "240"),
            ],
            AuditTrace::default(),
        );

        let mut json = serde_json::to_value(&result).unwrap();
        assert_eq!(serde_json::from_value::<RescissionResult>(json.clone()).unwrap(), result);

        json["total"] = serde_json::json!("999999");
        let tampered: RescissionResult = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(tampered.total, dec("4692"));

        json.as_object_mut().unwrap().remove("total");
        let without_total: RescissionResult = serde_json::from_value(json).unwrap();
        assert_eq!(without_total, result);
    }
}

//! Notice-period indemnity calculation functionality.
//!
//! A dismissal without cause owes 30 days of notice plus 3 days per
//! completed year of service, capped at 60 extra days. A mutual agreement
//! owes half of one integrated salary. A resignation owes nothing.

use rust_decimal::Decimal;

use crate::config::StatutoryRules;
use crate::models::{AuditStep, EmploymentSpan, EntitlementKind, EntitlementLine, TerminationType};

use super::money::{daily_rate, percent_label};

/// The label shown for the full notice indemnity.
pub const NOTICE_INDEMNITY_LABEL: &str = "Aviso Prévio Indenizado";

/// Statute for the reduced entitlements of a mutual agreement.
pub const MUTUAL_AGREEMENT_REF: &str = "CLT art. 484-A";

/// The result of calculating the notice indemnity.
#[derive(Debug, Clone)]
pub struct NoticeIndemnityResult {
    /// The notice line, if the termination type owes one.
    pub line: Option<EntitlementLine>,
    /// Total notice days paid, for dismissals without cause.
    pub notice_days: Option<u32>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the number of notice days owed on a dismissal without cause.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::notice_days_for;
/// use severance_engine::config::StatutoryRules;
///
/// let rules = StatutoryRules::default();
/// assert_eq!(notice_days_for(0, &rules), 30);
/// assert_eq!(notice_days_for(5, &rules), 45);
/// assert_eq!(notice_days_for(25, &rules), 90);
/// ```
pub fn notice_days_for(completed_years: i32, rules: &StatutoryRules) -> u32 {
    let years = completed_years.max(0) as u32;
    let extra = years
        .saturating_mul(rules.notice.extra_days_per_year)
        .min(rules.notice.max_extra_days);
    rules.notice.base_days.saturating_add(extra)
}

/// Calculates the notice-period indemnity for a termination.
///
/// # Arguments
///
/// * `termination_type` - How the contract ended
/// * `integrated_salary` - The integrated monthly salary
/// * `span` - The employment span; completed years extend the notice
/// * `rules` - The statutory rule set
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::{calculate_notice_indemnity, compute_span};
/// use severance_engine::config::StatutoryRules;
/// use severance_engine::models::TerminationType;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let span = compute_span(
///     NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
/// )
/// .unwrap();
///
/// let result = calculate_notice_indemnity(
///     TerminationType::WithoutCause,
///     Decimal::from(3000),
///     &span,
///     &StatutoryRules::default(),
///     1,
/// );
/// assert_eq!(result.line.unwrap().amount, Decimal::from(3300));
/// assert_eq!(result.notice_days, Some(33));
/// ```
pub fn calculate_notice_indemnity(
    termination_type: TerminationType,
    integrated_salary: Decimal,
    span: &EmploymentSpan,
    rules: &StatutoryRules,
    step_number: u32,
) -> NoticeIndemnityResult {
    let notice = &rules.notice;

    match termination_type {
        TerminationType::WithoutCause => {
            let completed_years = span.completed_years();
            let notice_days = notice_days_for(completed_years, rules);
            let daily = daily_rate(integrated_salary, rules);
            let amount = daily * Decimal::from(notice_days);

            let audit_step = AuditStep {
                step_number,
                rule_id: "notice_indemnity".to_string(),
                rule_name: "Notice Indemnity".to_string(),
                legal_ref: notice.legal_ref.clone(),
                input: serde_json::json!({
                    "termination_type": termination_type.as_str(),
                    "integrated_salary": integrated_salary.normalize().to_string(),
                    "total_months": span.total_months,
                    "completed_years": completed_years
                }),
                output: serde_json::json!({
                    "notice_days": notice_days,
                    "extra_days": notice_days - notice.base_days,
                    "amount": amount.normalize().to_string()
                }),
                reasoning: format!(
                    "{} base days + {} extra days for {} completed years (cap {}) = {} days x {} = {}",
                    notice.base_days,
                    notice_days - notice.base_days,
                    completed_years,
                    notice.max_extra_days,
                    notice_days,
                    daily.round_dp(2),
                    amount.round_dp(2)
                ),
            };

            NoticeIndemnityResult {
                line: Some(EntitlementLine {
                    kind: EntitlementKind::NoticeIndemnity,
                    label: NOTICE_INDEMNITY_LABEL.to_string(),
                    amount,
                }),
                notice_days: Some(notice_days),
                audit_step,
            }
        }
        TerminationType::MutualAgreement => {
            let fraction = notice.mutual_agreement_fraction;
            let amount = integrated_salary * fraction;

            let audit_step = AuditStep {
                step_number,
                rule_id: "notice_indemnity".to_string(),
                rule_name: "Notice Indemnity".to_string(),
                legal_ref: MUTUAL_AGREEMENT_REF.to_string(),
                input: serde_json::json!({
                    "termination_type": termination_type.as_str(),
                    "integrated_salary": integrated_salary.normalize().to_string(),
                    "fraction": fraction.normalize().to_string()
                }),
                output: serde_json::json!({
                    "amount": amount.normalize().to_string()
                }),
                reasoning: format!(
                    "Mutual agreement: {} x {} = {}",
                    integrated_salary.normalize(),
                    fraction.normalize(),
                    amount.round_dp(2)
                ),
            };

            NoticeIndemnityResult {
                line: Some(EntitlementLine {
                    kind: EntitlementKind::NoticeIndemnity,
                    label: format!("Aviso Prévio ({})", percent_label(fraction)),
                    amount,
                }),
                notice_days: None,
                audit_step,
            }
        }
        TerminationType::EmployeeResignation => {
            let audit_step = AuditStep {
                step_number,
                rule_id: "notice_indemnity".to_string(),
                rule_name: "Notice Indemnity".to_string(),
                legal_ref: notice.legal_ref.clone(),
                input: serde_json::json!({
                    "termination_type": termination_type.as_str()
                }),
                output: serde_json::json!({
                    "owed": false
                }),
                reasoning: "No notice indemnity - employee resigned".to_string(),
            };

            NoticeIndemnityResult {
                line: None,
                notice_days: None,
                audit_step,
            }
        }
    }
}

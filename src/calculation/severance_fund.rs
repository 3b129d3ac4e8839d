//! Severance fund (FGTS) calculation functionality.
//!
//! The employer pays a penalty over the fund balance on dismissal without
//! cause (40%) or mutual agreement (20%), and owes the current month's 8%
//! deposit for every termination except a resignation.

use rust_decimal::Decimal;

use crate::config::StatutoryRules;
use crate::models::{AuditStep, EntitlementKind, EntitlementLine, TerminationType};

use super::money::percent_label;
use super::notice_indemnity::MUTUAL_AGREEMENT_REF;

/// The result of calculating a severance fund entitlement.
#[derive(Debug, Clone)]
pub struct FundResult {
    /// The fund line, if the termination type owes one.
    pub line: Option<EntitlementLine>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the penalty rate for a termination type, if any is owed.
pub fn fund_penalty_rate(termination_type: TerminationType, rules: &StatutoryRules) -> Option<Decimal> {
    match termination_type {
        TerminationType::WithoutCause => Some(rules.fund.without_cause_penalty_rate),
        TerminationType::MutualAgreement => Some(rules.fund.mutual_agreement_penalty_rate),
        TerminationType::EmployeeResignation => None,
    }
}

/// Calculates the employer penalty over the severance fund balance.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::calculate_fund_penalty;
/// use severance_engine::config::StatutoryRules;
/// use severance_engine::models::TerminationType;
/// use rust_decimal::Decimal;
///
/// let rules = StatutoryRules::default();
/// let result = calculate_fund_penalty(TerminationType::WithoutCause, Decimal::from(2880), &rules, 1);
///
/// let line = result.line.unwrap();
/// assert_eq!(line.amount, Decimal::from(1152));
/// assert_eq!(line.label, "Multa FGTS (40%)");
/// ```
pub fn calculate_fund_penalty(
    termination_type: TerminationType,
    fund_balance: Decimal,
    rules: &StatutoryRules,
    step_number: u32,
) -> FundResult {
    let Some(rate) = fund_penalty_rate(termination_type, rules) else {
        let audit_step = AuditStep {
            step_number,
            rule_id: "fund_penalty".to_string(),
            rule_name: "Severance Fund Penalty".to_string(),
            legal_ref: rules.fund.legal_ref.clone(),
            input: serde_json::json!({
                "termination_type": termination_type.as_str(),
                "fund_balance": fund_balance.normalize().to_string()
            }),
            output: serde_json::json!({
                "owed": false
            }),
            reasoning: "No fund penalty - employee resigned".to_string(),
        };

        return FundResult {
            line: None,
            audit_step,
        };
    };

    let amount = fund_balance * rate;
    let legal_ref = if termination_type == TerminationType::MutualAgreement {
        MUTUAL_AGREEMENT_REF.to_string()
    } else {
        rules.fund.legal_ref.clone()
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "fund_penalty".to_string(),
        rule_name: "Severance Fund Penalty".to_string(),
        legal_ref,
        input: serde_json::json!({
            "termination_type": termination_type.as_str(),
            "fund_balance": fund_balance.normalize().to_string(),
            "rate": rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} = {}",
            fund_balance.normalize(),
            percent_label(rate),
            amount.round_dp(2)
        ),
    };

    FundResult {
        line: Some(EntitlementLine {
            kind: EntitlementKind::FundPenalty,
            label: format!("Multa FGTS ({})", percent_label(rate)),
            amount,
        }),
        audit_step,
    }
}

/// Calculates the current month's severance fund deposit.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::calculate_monthly_fund_deposit;
/// use severance_engine::config::StatutoryRules;
/// use severance_engine::models::TerminationType;
/// use rust_decimal::Decimal;
///
/// let rules = StatutoryRules::default();
///
/// let result = calculate_monthly_fund_deposit(TerminationType::MutualAgreement, Decimal::from(3000), &rules, 1);
/// assert_eq!(result.line.unwrap().amount, Decimal::from(240));
///
/// let result = calculate_monthly_fund_deposit(TerminationType::EmployeeResignation, Decimal::from(3000), &rules, 1);
/// assert!(result.line.is_none());
/// ```
pub fn calculate_monthly_fund_deposit(
    termination_type: TerminationType,
    integrated_salary: Decimal,
    rules: &StatutoryRules,
    step_number: u32,
) -> FundResult {
    let rate = rules.fund.monthly_deposit_rate;

    if termination_type.is_resignation() {
        let audit_step = AuditStep {
            step_number,
            rule_id: "monthly_fund_deposit".to_string(),
            rule_name: "Monthly Fund Deposit".to_string(),
            legal_ref: rules.fund.legal_ref.clone(),
            input: serde_json::json!({
                "termination_type": termination_type.as_str()
            }),
            output: serde_json::json!({
                "owed": false
            }),
            reasoning: "No current-month deposit line - employee resigned".to_string(),
        };

        return FundResult {
            line: None,
            audit_step,
        };
    }

    let amount = integrated_salary * rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_fund_deposit".to_string(),
        rule_name: "Monthly Fund Deposit".to_string(),
        legal_ref: rules.fund.legal_ref.clone(),
        input: serde_json::json!({
            "termination_type": termination_type.as_str(),
            "integrated_salary": integrated_salary.normalize().to_string(),
            "rate": rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} = {}",
            integrated_salary.normalize(),
            percent_label(rate),
            amount.round_dp(2)
        ),
    };

    FundResult {
        line: Some(EntitlementLine {
            kind: EntitlementKind::MonthlyFundDeposit,
            label: format!("FGTS do Mês ({})", percent_label(rate)),
            amount,
        }),
        audit_step,
    }
}

//! Formatted rescission statement.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{EntitlementKind, RescissionResult, TerminationType};

use super::currency::format_brl;

/// Notice shown below every statement.
pub const DISCLAIMER: &str = "Os valores calculados são estimativas baseadas nas informações \
fornecidas e na legislação trabalhista vigente. Esta ferramenta não substitui a análise de um \
profissional qualificado.";

/// One formatted line of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// Which entitlement this line shows.
    pub kind: EntitlementKind,
    /// Entitlement name.
    pub label: String,
    /// Formatted amount, e.g. `R$ 3.300,00`.
    pub amount: String,
}

/// A result rendered for display.
///
/// Only payable lines appear; zero and negative amounts are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RescissionStatement {
    /// How the contract ended.
    pub termination_type: TerminationType,
    /// Payable lines, in presentation order.
    pub lines: Vec<StatementLine>,
    /// Formatted grand total.
    pub total: String,
    /// Estimate disclaimer.
    pub disclaimer: String,
}

impl RescissionStatement {
    /// Renders a result.
    ///
    /// # Examples
    ///
    /// ```
    /// use severance_engine::calculation::compute_severance;
    /// use severance_engine::config::StatutoryRules;
    /// use severance_engine::models::{CompensationProfile, RescissionRequest, TerminationType};
    /// use severance_engine::presentation::RescissionStatement;
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
    /// let result = compute_severance(&request, &StatutoryRules::default()).unwrap();
    ///
    /// let statement = RescissionStatement::from_result(&result);
    /// assert_eq!(statement.lines.len(), 3);
    /// assert_eq!(statement.total, "R$\u{a0}4.692,00");
    /// ```
    pub fn from_result(result: &RescissionResult) -> Self {
        let lines = result
            .payable_lines()
            .map(|line| StatementLine {
                kind: line.kind,
                label: line.label.clone(),
                amount: format_brl(line.amount),
            })
            .collect();

        Self {
            termination_type: result.termination_type,
            lines,
            total: format_brl(result.total),
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}

impl fmt::Display for RescissionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}: {}", line.label, line.amount)?;
        }
        writeln!(f, "Total: {}", self.total)?;
        write!(f, "{}", self.disclaimer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_severance;
    use crate::config::StatutoryRules;
    use crate::models::{CompensationProfile, RescissionRequest};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn statement(termination_type: TerminationType) -> RescissionStatement {
        let request = RescissionRequest::new(
            termination_type,
            CompensationProfile::with_base_salary(Decimal::from(3000)),
            NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        )
        .with_severance_fund_balance(Decimal::from(2880));
        let result = compute_severance(&request, &StatutoryRules::default()).unwrap();
        RescissionStatement::from_result(&result)
    }

    /// ST-001: zero lines are omitted
    #[test]
    fn test_only_payable_lines_are_shown() {
        let statement = statement(TerminationType::WithoutCause);
        let labels: Vec<&str> = statement.lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Aviso Prévio Indenizado", "Multa FGTS (40%)", "FGTS do Mês (8%)"]
        );
        assert_eq!(statement.lines[0].amount, "R$\u{a0}3.300,00");
        assert_eq!(statement.lines[1].amount, "R$\u{a0}1.152,00");
        assert_eq!(statement.lines[2].amount, "R$\u{a0}240,00");
    }

    /// ST-002: nothing payable still renders a zero total
    #[test]
    fn test_resignation_after_whole_year_totals_zero() {
        let statement = statement(TerminationType::EmployeeResignation);
        assert!(statement.lines.is_empty());
        assert_eq!(statement.total, "R$\u{a0}0,00");
    }

    #[test]
    fn test_display_lists_lines_total_and_disclaimer() {
        let text = statement(TerminationType::MutualAgreement).to_string();
        assert!(text.starts_with("Aviso Prévio (50%): R$\u{a0}1.500,00\n"));
        assert!(text.contains("Total: R$\u{a0}2.316,00\n"));
        assert!(text.ends_with(DISCLAIMER));
    }
}

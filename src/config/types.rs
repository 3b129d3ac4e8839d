//! Configuration types for severance calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every type has a
//! `Default` that reproduces the statute, so the engine runs without any
//! files on disk.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the legislation a rule set encodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegislationMetadata {
    /// Short code for the rule set (e.g., "CLT").
    pub code: String,
    /// The human-readable name of the legislation.
    pub name: String,
    /// The version or effective date of the rule set.
    pub version: String,
    /// URL to the official text.
    pub source_url: String,
}

impl Default for LegislationMetadata {
    fn default() -> Self {
        Self {
            code: "CLT".to_string(),
            name: "Consolidação das Leis do Trabalho".to_string(),
            version: "2017-11-11".to_string(),
            source_url: "https://www.planalto.gov.br/ccivil_03/decreto-lei/del5452.htm"
                .to_string(),
        }
    }
}

/// Notice-period indemnity parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeRules {
    /// Reference to the statute for notice indemnity.
    pub legal_ref: String,
    /// Days of notice every dismissed employee is owed.
    pub base_days: u32,
    /// Additional days per completed year of service.
    pub extra_days_per_year: u32,
    /// Cap on the additional days.
    pub max_extra_days: u32,
    /// Share of one integrated salary owed on a mutual agreement.
    pub mutual_agreement_fraction: Decimal,
}

impl Default for NoticeRules {
    fn default() -> Self {
        Self {
            legal_ref: "CLT art. 487; Lei 12.506/2011".to_string(),
            base_days: 30,
            extra_days_per_year: 3,
            max_extra_days: 60,
            mutual_agreement_fraction: Decimal::new(5, 1),
        }
    }
}

/// Month-rounding parameters shared by the 13th salary and vacation
/// proration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProrationRules {
    /// Reference to the statute for the proportional 13th salary.
    pub legal_ref: String,
    /// Divisor turning a monthly salary into one month of entitlement.
    pub months_per_year: u32,
    /// Days in the final partial month from which it counts as a full month.
    pub half_month_threshold_days: u32,
}

impl Default for ProrationRules {
    fn default() -> Self {
        Self {
            legal_ref: "Lei 4.090/1962 art. 1º §2º".to_string(),
            months_per_year: 12,
            half_month_threshold_days: 15,
        }
    }
}

/// Vacation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRules {
    /// Reference to the statute for vacation pay and its bonus.
    pub legal_ref: String,
    /// Vacation pay is increased by `1 / bonus_divisor`.
    pub bonus_divisor: u32,
    /// Upper bound on accrued vacation days accepted as input.
    pub max_accrued_days: u32,
}

impl Default for VacationRules {
    fn default() -> Self {
        Self {
            legal_ref: "CF art. 7º XVII; CLT arts. 146 e 147".to_string(),
            bonus_divisor: 3,
            max_accrued_days: 30,
        }
    }
}

/// Severance fund (FGTS) parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundRules {
    /// Reference to the statute for the fund penalty and deposits.
    pub legal_ref: String,
    /// Penalty rate over the balance on dismissal without cause.
    pub without_cause_penalty_rate: Decimal,
    /// Penalty rate over the balance on a mutual agreement.
    pub mutual_agreement_penalty_rate: Decimal,
    /// Monthly deposit rate over the integrated salary.
    pub monthly_deposit_rate: Decimal,
}

impl Default for FundRules {
    fn default() -> Self {
        Self {
            legal_ref: "Lei 8.036/1990 arts. 15 e 18".to_string(),
            without_cause_penalty_rate: Decimal::new(40, 2),
            mutual_agreement_penalty_rate: Decimal::new(20, 2),
            monthly_deposit_rate: Decimal::new(8, 2),
        }
    }
}

/// The complete statutory parameter set, as found in `rules.yaml`.
///
/// # Example
///
/// ```
/// use severance_engine::config::StatutoryRules;
/// use rust_decimal::Decimal;
///
/// let rules = StatutoryRules::default();
/// assert_eq!(rules.commercial_month_days, 30);
/// assert_eq!(rules.fund.without_cause_penalty_rate, Decimal::new(40, 2));
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryRules {
    /// Flat month length used to turn a monthly salary into a daily rate.
    pub commercial_month_days: u32,
    /// Reference to the statute for the salary balance.
    pub salary_balance_ref: String,
    /// Notice indemnity parameters.
    pub notice: NoticeRules,
    /// Month-rounding parameters.
    pub proration: ProrationRules,
    /// Vacation parameters.
    pub vacation: VacationRules,
    /// Severance fund parameters.
    pub fund: FundRules,
}

impl Default for StatutoryRules {
    fn default() -> Self {
        Self {
            commercial_month_days: 30,
            salary_balance_ref: "CLT art. 477 §4º".to_string(),
            notice: NoticeRules::default(),
            proration: ProrationRules::default(),
            vacation: VacationRules::default(),
            fund: FundRules::default(),
        }
    }
}

impl StatutoryRules {
    /// Checks that the rule set can be used for calculation.
    ///
    /// Divisors must be non-zero and rates must lie within `[0, 1]`.
    pub fn validate(&self) -> EngineResult<()> {
        let divisors = [
            ("commercial_month_days", self.commercial_month_days),
            ("proration.months_per_year", self.proration.months_per_year),
            ("vacation.bonus_divisor", self.vacation.bonus_divisor),
        ];
        for (field, value) in divisors {
            if value == 0 {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: "must be greater than zero".to_string(),
                });
            }
        }

        let rates = [
            (
                "notice.mutual_agreement_fraction",
                self.notice.mutual_agreement_fraction,
            ),
            (
                "fund.without_cause_penalty_rate",
                self.fund.without_cause_penalty_rate,
            ),
            (
                "fund.mutual_agreement_penalty_rate",
                self.fund.mutual_agreement_penalty_rate,
            ),
            ("fund.monthly_deposit_rate", self.fund.monthly_deposit_rate),
        ];
        for (field, value) in rates {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must be between 0 and 1, got {}", value),
                });
            }
        }

        Ok(())
    }
}

/// The complete severance configuration loaded from YAML files.
#[derive(Debug, Clone, Default)]
pub struct SeveranceConfig {
    /// Legislation metadata.
    metadata: LegislationMetadata,
    /// Statutory parameters.
    rules: StatutoryRules,
}

impl SeveranceConfig {
    /// Creates a new SeveranceConfig from its component parts.
    pub fn new(metadata: LegislationMetadata, rules: StatutoryRules) -> Self {
        Self { metadata, rules }
    }

    /// Returns the legislation metadata.
    pub fn legislation(&self) -> &LegislationMetadata {
        &self.metadata
    }

    /// Returns the statutory parameters.
    pub fn rules(&self) -> &StatutoryRules {
        &self.rules
    }
}

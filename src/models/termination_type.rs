//! Termination type model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// How the employment contract ended.
///
/// The termination type decides which entitlements exist at all: notice
/// indemnity, the severance-fund penalty and the current-month fund deposit
/// are never owed on an employee resignation.
///
/// # Example
///
/// ```
/// use severance_engine::models::TerminationType;
///
/// let parsed: TerminationType = "acordo".parse().unwrap();
/// assert_eq!(parsed, TerminationType::MutualAgreement);
/// assert_eq!(parsed.form_code(), "acordo");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationType {
    /// Employer-initiated termination without employee fault.
    WithoutCause,
    /// Employee-initiated termination.
    EmployeeResignation,
    /// Consensual termination (CLT art. 484-A).
    MutualAgreement,
}

impl TerminationType {
    /// All termination types, in the order the calculator form lists them.
    pub const ALL: [TerminationType; 3] = [
        TerminationType::WithoutCause,
        TerminationType::EmployeeResignation,
        TerminationType::MutualAgreement,
    ];

    /// The code the calculator form submits for this type.
    pub fn form_code(&self) -> &'static str {
        match self {
            TerminationType::WithoutCause => "semJustaCausa",
            TerminationType::EmployeeResignation => "pedidoDemissao",
            TerminationType::MutualAgreement => "acordo",
        }
    }

    /// The snake_case name used on the JSON API.
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationType::WithoutCause => "without_cause",
            TerminationType::EmployeeResignation => "employee_resignation",
            TerminationType::MutualAgreement => "mutual_agreement",
        }
    }

    /// Returns true if the employee initiated the termination.
    pub fn is_resignation(&self) -> bool {
        *self == TerminationType::EmployeeResignation
    }
}

impl fmt::Display for TerminationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TerminationType {
    type Err = EngineError;

    /// Accepts both the form codes and the snake_case API names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        TerminationType::ALL
            .into_iter()
            .find(|t| t.form_code() == trimmed || t.as_str() == trimmed)
            .ok_or_else(|| EngineError::InvalidTerminationType {
                value: trimmed.to_string(),
            })
    }
}

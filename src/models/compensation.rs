//! Compensation profile model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The employee's monthly compensation base.
///
/// Severance entitlements are computed over the *integrated* salary, which
/// folds habitual overtime, commissions and other allowances into the base
/// salary.
///
/// # Example
///
/// ```
/// use severance_engine::models::CompensationProfile;
/// use rust_decimal::Decimal;
///
/// let profile = CompensationProfile {
///     base_salary: Decimal::from(3000),
///     average_overtime_pay: Decimal::from(500),
///     average_commissions: Decimal::from(800),
///     other_allowances: Decimal::from(400),
/// };
/// assert_eq!(profile.integrated_salary(), Some(Decimal::from(4700)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationProfile {
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Average monthly overtime pay.
    #[serde(default)]
    pub average_overtime_pay: Decimal,
    /// Average monthly commissions.
    #[serde(default)]
    pub average_commissions: Decimal,
    /// Any other habitual monthly allowances.
    #[serde(default)]
    pub other_allowances: Decimal,
}

impl CompensationProfile {
    /// Creates a profile with only a base salary.
    pub fn with_base_salary(base_salary: Decimal) -> Self {
        Self {
            base_salary,
            average_overtime_pay: Decimal::ZERO,
            average_commissions: Decimal::ZERO,
            other_allowances: Decimal::ZERO,
        }
    }

    /// Sum of the four compensation components, or `None` if it does not
    /// fit in a `Decimal`.
    pub fn integrated_salary(&self) -> Option<Decimal> {
        self.base_salary
            .checked_add(self.average_overtime_pay)?
            .checked_add(self.average_commissions)?
            .checked_add(self.other_allowances)
    }

    /// The components paired with their field names, in declaration order.
    pub fn fields(&self) -> [(&'static str, Decimal); 4] {
        [
            ("base_salary", self.base_salary),
            ("average_overtime_pay", self.average_overtime_pay),
            ("average_commissions", self.average_commissions),
            ("other_allowances", self.other_allowances),
        ]
    }
}

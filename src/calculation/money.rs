//! Shared monetary helpers for entitlement calculations.
//!
//! All helpers keep full decimal precision; rounding only happens at the
//! presentation boundary.

use rust_decimal::Decimal;

use crate::config::StatutoryRules;

/// One day of integrated salary on the flat commercial month.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::daily_rate;
/// use severance_engine::config::StatutoryRules;
/// use rust_decimal::Decimal;
///
/// let rules = StatutoryRules::default();
/// assert_eq!(daily_rate(Decimal::from(3000), &rules), Decimal::from(100));
/// ```
pub fn daily_rate(integrated_salary: Decimal, rules: &StatutoryRules) -> Decimal {
    integrated_salary / Decimal::from(rules.commercial_month_days)
}

/// One twelfth of the integrated salary, the value of one prorated month.
pub fn monthly_share(integrated_salary: Decimal, rules: &StatutoryRules) -> Decimal {
    integrated_salary / Decimal::from(rules.proration.months_per_year)
}

/// Adds the constitutional vacation bonus to a vacation base amount.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::with_vacation_bonus;
/// use severance_engine::config::StatutoryRules;
/// use rust_decimal::Decimal;
///
/// let rules = StatutoryRules::default();
/// assert_eq!(with_vacation_bonus(Decimal::from(3000), &rules), Decimal::from(4000));
/// ```
pub fn with_vacation_bonus(base: Decimal, rules: &StatutoryRules) -> Decimal {
    base + base / Decimal::from(rules.vacation.bonus_divisor)
}

/// Formats a rate as a whole percentage for labels (0.40 becomes "40%").
pub fn percent_label(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

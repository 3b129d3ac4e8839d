//! Brazilian real (BRL) currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// The currency symbol, followed by a non-breaking space.
pub const BRL_PREFIX: &str = "R$\u{a0}";

/// Formats an amount as pt-BR currency.
///
/// Rounds half away from zero to two places, groups thousands with `.` and
/// separates cents with `,`. Negative amounts get a leading `-`.
///
/// # Examples
///
/// ```
/// use severance_engine::presentation::format_brl;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_brl(Decimal::from(4692)), "R$\u{a0}4.692,00");
/// assert_eq!(format_brl(Decimal::new(-2005, 1)), "-R$\u{a0}200,50");
/// ```
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}{BRL_PREFIX}{},{cents}", group_thousands(whole))
}

/// Inserts `.` between groups of three digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

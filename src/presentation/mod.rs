//! Presentation boundary for the calculator page.
//!
//! Raw form coercion on the way in, pt-BR currency formatting on the way
//! out. The engine itself never rounds or formats.

mod currency;
mod form;
mod statement;

pub use currency::{BRL_PREFIX, format_brl};
pub use form::{RescissionForm, parse_amount, parse_date, parse_days};
pub use statement::{DISCLAIMER, RescissionStatement, StatementLine};

//! Calculation logic for the Severance Engine.
//!
//! This module contains the employment span decomposition, request
//! validation, and one calculation function per entitlement: salary balance,
//! notice indemnity, proportional 13th salary, proportional and accrued
//! vacation, and the severance fund penalty and monthly deposit.
//! [`compute_severance`] runs them all in presentation order.

mod date_span;
mod money;
mod notice_indemnity;
mod salary_balance;
mod severance;
mod severance_fund;
mod thirteenth_salary;
mod vacation;
mod validation;

pub use date_span::{compute_span, days_in_month};
pub use money::{daily_rate, monthly_share, percent_label, with_vacation_bonus};
pub use notice_indemnity::{
    MUTUAL_AGREEMENT_REF, NOTICE_INDEMNITY_LABEL, NoticeIndemnityResult,
    calculate_notice_indemnity, notice_days_for,
};
pub use salary_balance::{SALARY_BALANCE_LABEL, SalaryBalanceResult, calculate_salary_balance};
pub use severance::{compute_severance, payable_total};
pub use severance_fund::{
    FundResult, calculate_fund_penalty, calculate_monthly_fund_deposit, fund_penalty_rate,
};
pub use thirteenth_salary::{
    THIRTEENTH_SALARY_LABEL, ThirteenthSalaryResult, calculate_thirteenth_salary, prorated_months,
};
pub use vacation::{
    ACCRUED_VACATION_LABEL, PROPORTIONAL_VACATION_LABEL, VacationResult,
    calculate_accrued_vacation, calculate_proportional_vacation,
};
pub use validation::{MAX_MONETARY_AMOUNT, validate_request};

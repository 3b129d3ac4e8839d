//! Severance Engine for Brazilian CLT employment contracts
//!
//! This crate computes the entitlements owed when an employment contract
//! ends (*verbas rescisórias*): salary balance, notice indemnity, the
//! proportional 13th salary, vacation pay and severance fund (FGTS) amounts,
//! depending on how the contract was terminated.
//!
//! # Example
//!
//! ```
//! use severance_engine::calculation::compute_severance;
//! use severance_engine::config::ConfigLoader;
//! use severance_engine::models::{CompensationProfile, RescissionRequest, TerminationType};
//! use severance_engine::presentation::RescissionStatement;
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let loader = ConfigLoader::builtin();
//! let request = RescissionRequest::new(
//!     TerminationType::WithoutCause,
//!     CompensationProfile::with_base_salary(Decimal::from(3000)),
//!     NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
//! )
//! .with_severance_fund_balance(Decimal::from(2880));
//!
//! let result = compute_severance(&request, loader.rules()).unwrap();
//! let statement = RescissionStatement::from_result(&result);
//! assert_eq!(statement.total, "R$\u{a0}4.692,00");
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;

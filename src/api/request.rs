//! Request types for the Severance Engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{CompensationProfile, RescissionRequest, TerminationType};

/// Request body for the `/calculate` endpoint.
///
/// The termination type is carried as text so that an unknown code is
/// reported as `INVALID_TERMINATION_TYPE` rather than as malformed JSON.
/// Both the snake_case names and the calculator form codes are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// How the contract ended.
    pub termination_type: String,
    /// The monthly compensation base.
    pub compensation: CompensationProfile,
    /// Admission date.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Termination date.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Vested vacation days not yet taken.
    #[serde(default)]
    pub accrued_vacation_days: Option<i32>,
    /// Severance fund (FGTS) balance.
    #[serde(default)]
    pub severance_fund_balance: Decimal,
}

impl TryFrom<CalculationRequest> for RescissionRequest {
    type Error = EngineError;

    fn try_from(req: CalculationRequest) -> Result<Self, Self::Error> {
        let termination_type: TerminationType = req.termination_type.parse()?;

        Ok(RescissionRequest {
            termination_type,
            compensation: req.compensation,
            start_date: req.start_date,
            end_date: req.end_date,
            accrued_vacation_days: req.accrued_vacation_days,
            severance_fund_balance: req.severance_fund_balance,
        })
    }
}

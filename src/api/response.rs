//! Response types for the Severance Engine API.
//!
//! This module defines the success envelope, the error response structures
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::RescissionResult;
use crate::presentation::RescissionStatement;

/// Response body for a successful calculation.
///
/// The identifier and timestamp live here rather than on the
/// [`RescissionResult`], which stays a pure function of its request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The unrounded engine result.
    pub result: RescissionResult,
    /// The result formatted for display.
    pub statement: RescissionStatement,
}

impl CalculationResponse {
    /// Wraps a result with a fresh identifier and timestamp.
    pub fn new(result: RescissionResult) -> Self {
        let statement = RescissionStatement::from_result(&result);
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            result,
            statement,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidSalary { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_SALARY",
                    message,
                    "Informe um salário válido.",
                ),
            ),
            EngineError::InvalidDateRange { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_DATE_RANGE",
                    message,
                    "Both dates are required and the end date must not precede the start date",
                ),
            ),
            EngineError::InvalidVacationDays { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_VACATION_DAYS", message))
            }
            EngineError::InvalidMonetaryField { field, .. } => ApiErrorResponse::bad_request(
                ApiError::with_details("INVALID_MONETARY_FIELD", message, field),
            ),
            EngineError::InvalidTerminationType { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_TERMINATION_TYPE",
                    message,
                    "Expected one of: without_cause, employee_resignation, mutual_agreement",
                ),
            ),
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid rule set", message),
            },
        }
    }
}

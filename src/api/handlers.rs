//! HTTP request handlers for the Severance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_severance;
use crate::error::EngineResult;
use crate::models::RescissionRequest;
use crate::presentation::RescissionForm;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/form", post(calculate_form_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a typed calculation request and returns the computed entitlements.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let request: EngineResult<RescissionRequest> = request.try_into();
    respond(&state, correlation_id, request)
}

/// Handler for POST /calculate/form endpoint.
///
/// Accepts the raw calculator form, coerces it, and calculates.
async fn calculate_form_handler(
    State(state): State<AppState>,
    payload: Result<Json<RescissionForm>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculator form");

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    respond(&state, correlation_id, form.to_request())
}

/// Runs the engine and renders either the result or the error.
fn respond(
    state: &AppState,
    correlation_id: Uuid,
    request: EngineResult<RescissionRequest>,
) -> Response {
    let start_time = Instant::now();
    let outcome = request.and_then(|request| compute_severance(&request, state.rules()));

    match outcome {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                termination_type = %result.termination_type,
                lines_count = result.payable_lines().count(),
                total = %result.total.round_dp(2),
                warnings_count = result.audit_trace.warnings.len(),
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(CalculationResponse::new(result)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                validation = err.is_validation(),
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error).into_response()
}

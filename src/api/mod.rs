//! HTTP API module for the Severance Engine.
//!
//! This module provides the REST API endpoints for calculating severance
//! entitlements from either a typed JSON request or the raw calculator form.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;

//! Core data models for the Severance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod compensation;
mod employment_span;
mod rescission_request;
mod rescission_result;
mod termination_type;

pub use compensation::CompensationProfile;
pub use employment_span::EmploymentSpan;
pub use rescission_request::RescissionRequest;
pub use rescission_result::{
    AuditStep, AuditTrace, AuditWarning, EntitlementKind, EntitlementLine, RescissionResult,
};
pub use termination_type::TerminationType;

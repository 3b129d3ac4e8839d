//! Configuration loading and management for the Severance Engine.
//!
//! This module provides functionality to load the statutory rule set from
//! YAML files: legislation metadata, notice-period parameters, proration
//! thresholds, vacation bonus and severance fund rates.
//!
//! # Example
//!
//! ```no_run
//! use severance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/clt").unwrap();
//! println!("Loaded rule set: {}", config.legislation().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    FundRules, LegislationMetadata, NoticeRules, ProrationRules, SeveranceConfig,
    StatutoryRules, VacationRules,
};

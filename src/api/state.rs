//! Application state for the Severance Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, StatutoryRules};

/// Shared application state.
///
/// Holds the loaded statutory rule set, shared read-only across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rule set.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the statutory rules used for every calculation.
    pub fn rules(&self) -> &StatutoryRules {
        self.config.rules()
    }
}

//! Application state for the Tip Pool Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::PayrollEngine;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Contains the loaded policy configuration and an engine built from it.
#[derive(Clone)]
pub struct AppState {
    /// The loaded policy configuration.
    config: Arc<ConfigLoader>,
    /// Engine applying the loaded policy.
    engine: Arc<PayrollEngine>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let engine = PayrollEngine::new(config.policy().clone());
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the payroll engine for the loaded policy.
    pub fn engine(&self) -> &PayrollEngine {
        &self.engine
    }
}

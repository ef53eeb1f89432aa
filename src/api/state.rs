//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::StatutoryConfigLoader;
use crate::store::PayrollStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded statutory configuration and the payroll record store.
#[derive(Clone)]
pub struct AppState {
    /// The loaded statutory configuration.
    config: Arc<StatutoryConfigLoader>,
    /// The payroll record store.
    store: Arc<dyn PayrollStore>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: StatutoryConfigLoader, store: Arc<dyn PayrollStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &StatutoryConfigLoader {
        &self.config
    }

    /// Returns the shared configuration handle.
    pub fn config_handle(&self) -> Arc<StatutoryConfigLoader> {
        Arc::clone(&self.config)
    }

    /// Returns the record store.
    pub fn store(&self) -> &dyn PayrollStore {
        self.store.as_ref()
    }

    /// Returns the shared store handle.
    pub fn store_handle(&self) -> Arc<dyn PayrollStore> {
        Arc::clone(&self.store)
    }
}

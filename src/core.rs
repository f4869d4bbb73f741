//! Core Rowhaus functionality
//!
//! This module contains the main RowHaus struct and its implementation,
//! providing centralized coordination for adapters and event dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::RowHausError;
use config::{AdapterConfig, AppConfig};
use event_system::EventDispatcher;
use row_adapter::RowAdapter;

/// Main Rowhaus coordinator that manages the shared event dispatcher and
/// the named adapter registry
pub struct RowHaus {
    dispatcher: Arc<EventDispatcher>,
    adapters: HashMap<String, RowAdapter>,
    adapter_defaults: AdapterConfig,
}

impl RowHaus {
    /// Create a new RowHaus with default settings
    pub fn new() -> Self {
        Self {
            dispatcher: Arc::new(EventDispatcher::new()),
            adapters: HashMap::new(),
            adapter_defaults: AdapterConfig::new(false, 1000),
        }
    }

    /// Create a new RowHaus from application configuration
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            dispatcher: Arc::new(EventDispatcher::with_config(&config.event)),
            adapters: HashMap::new(),
            adapter_defaults: config.adapter,
        }
    }

    /// Get the shared event dispatcher
    pub fn dispatcher(&self) -> &Arc<EventDispatcher> {
        &self.dispatcher
    }

    /// Build an adapter wired to the shared dispatcher and configured defaults
    pub fn build_adapter(&self, table_name: &str) -> RowAdapter {
        RowAdapter::new(table_name.to_string())
            .with_dispatcher(Arc::clone(&self.dispatcher))
            .continue_on_error(self.adapter_defaults.continue_on_error)
            .with_max_batch_size(self.adapter_defaults.max_batch_size)
    }

    /// Register an adapter with a given name
    pub fn register_adapter(
        &mut self,
        name: String,
        adapter: RowAdapter,
    ) -> Result<(), RowHausError> {
        if self.adapters.contains_key(&name) {
            return Err(RowHausError::AdapterAlreadyRegistered(name));
        }

        self.adapters.insert(name, adapter);
        Ok(())
    }

    /// Get a registered adapter by name
    pub fn get_adapter(&self, name: &str) -> Result<&RowAdapter, RowHausError> {
        self.adapters
            .get(name)
            .ok_or_else(|| RowHausError::AdapterNotFound(name.to_string()))
    }

    /// Get a mutable reference to a registered adapter by name
    pub fn get_adapter_mut(&mut self, name: &str) -> Result<&mut RowAdapter, RowHausError> {
        self.adapters
            .get_mut(name)
            .ok_or_else(|| RowHausError::AdapterNotFound(name.to_string()))
    }

    /// List all registered adapter names
    pub fn list_adapters(&self) -> Vec<&String> {
        self.adapters.keys().collect()
    }

    /// Remove an adapter by name
    pub fn unregister_adapter(&mut self, name: &str) -> Result<(), RowHausError> {
        self.adapters
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| RowHausError::AdapterNotFound(name.to_string()))
    }
}

impl Default for RowHaus {
    fn default() -> Self {
        Self::new()
    }
}

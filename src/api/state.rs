//! Application state for the forecast API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::history::{HistoryStore, InMemoryHistoryStore};

/// Shared application state.
///
/// Holds the loaded configuration and the forecast history store.
#[derive(Clone)]
pub struct AppState {
    /// The loaded forecast configuration.
    config: Arc<ConfigLoader>,
    /// Saved forecast snapshots.
    history: Arc<dyn HistoryStore>,
}

impl AppState {
    /// Creates application state with an in-memory history store.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_history(config, Arc::new(InMemoryHistoryStore::new()))
    }

    /// Creates application state with the given history store.
    pub fn with_history(config: ConfigLoader, history: Arc<dyn HistoryStore>) -> Self {
        Self {
            config: Arc::new(config),
            history,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the history store.
    pub fn history(&self) -> &dyn HistoryStore {
        self.history.as_ref()
    }
}

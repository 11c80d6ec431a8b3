//! Application state management for climate-api.
//!
//! This module defines the shared state that is passed to all handlers,
//! containing the configuration and the store handle.

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::logging::log_store_stats;
use crate::store::{ClimateStore, StoreCounts};

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Read-only store handle
    pub store: ClimateStore,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, store: ClimateStore) -> Self {
        Self { config, store }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(config: Config, store: ClimateStore) -> Arc<Self> {
        Arc::new(Self::new(config, store))
    }

    /// Open the configured store and build the state from it
    pub async fn connect(config: Config) -> Result<Self> {
        let store = ClimateStore::connect(&config.database).await?;
        Ok(Self::new(config, store))
    }

    /// Check that both tables are readable and log what they hold.
    ///
    /// An empty store is accepted; every route has a defined answer for it.
    pub async fn validate(&self) -> Result<StoreCounts> {
        let counts = self.store.counts().await?;
        let range = self.store.date_range().await?;

        log_store_stats(
            &self.config.database.path.display().to_string(),
            &counts,
            &range,
        );

        Ok(counts)
    }
}

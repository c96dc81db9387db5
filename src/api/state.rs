//! Application state for the rate engine API.

use std::sync::Arc;

use crate::calculation::RateEngine;
use crate::tariff::InMemoryTariff;

/// Shared application state.
///
/// Holds the rate engine, shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<RateEngine<InMemoryTariff>>,
}

impl AppState {
    /// Creates a new application state around an engine.
    pub fn new(engine: RateEngine<InMemoryTariff>) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns the rate engine.
    pub fn engine(&self) -> &RateEngine<InMemoryTariff> {
        &self.engine
    }
}

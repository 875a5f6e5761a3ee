//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The sequencing core is pure, so the only shared piece is the configured
//! priority table, read-only for the lifetime of the process. Concurrent
//! uploads never interact: each request sequences its own input.

use std::sync::Arc;

use crate::boarding::PriorityTable;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Override table for the fixed-priority boarding scenario.
    pub priority: Arc<PriorityTable>,
}

impl AppState {
    #[must_use]
    pub fn new(priority: PriorityTable) -> Self {
        Self { priority: Arc::new(priority) }
    }

    /// Build state from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(PriorityTable::from_env())
    }
}

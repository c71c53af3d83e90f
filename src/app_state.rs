//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::DrawConfig;
use crate::domain::{CategoryTable, EventBus};
use crate::service::{DrawService, RehearsalPool};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Draw service owning the pool and ledger.
    pub draw_service: Arc<DrawService>,
    /// Isolated rehearsal pool; `None` when rehearsal draws are disabled.
    pub rehearsal: Option<Arc<RehearsalPool>>,
    /// Whether the client address is read from `X-Forwarded-For`.
    pub trust_forwarded_for: bool,
}

impl AppState {
    /// Wires the service layer for `table` according to `config`.
    #[must_use]
    pub fn new(table: CategoryTable, config: &DrawConfig) -> Self {
        let event_bus = EventBus::new(config.event_bus_capacity);
        let rehearsal = config
            .rehearsal_enabled
            .then(|| Arc::new(RehearsalPool::new(table.clone())));
        Self {
            draw_service: Arc::new(DrawService::new(table, event_bus)),
            rehearsal,
            trust_forwarded_for: config.trust_forwarded_for,
        }
    }
}

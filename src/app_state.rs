//! Shared application state injected into the demo handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::api::dto::RouteInfo;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// When the server finished building its routes.
    pub started_at: DateTime<Utc>,
    /// Snapshot of the mounted routes, in registration order.
    pub routes: Arc<[RouteInfo]>,
}

impl AppState {
    /// Creates state for the given route snapshot, stamped with now.
    #[must_use]
    pub fn new(routes: Arc<[RouteInfo]>) -> Self {
        Self {
            started_at: Utc::now(),
            routes,
        }
    }
}

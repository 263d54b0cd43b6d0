//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the database pool and one shared HTTP client reused for outbound
//! webhook deliveries. Handlers are request-scoped and hold no locks.

use sqlx::PgPool;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Outbound HTTP client for webhook notifications.
    pub http: reqwest::Client,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool, http: reqwest::Client::new() }
    }
}

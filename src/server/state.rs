//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::service::booking::transition::SweepRule;

/// Application state containing shared resources.
///
/// Cloning is cheap: `DatabaseConnection` is a pool handle and `SweepRule` is `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool shared by all requests.
    pub db: DatabaseConnection,

    /// Rule applied by the on-demand release endpoint.
    pub long_sweep: SweepRule,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `long_sweep` - Expiry rule for releasing stale pending bookings on demand
    pub fn new(db: DatabaseConnection, long_sweep: SweepRule) -> Self {
        Self { db, long_sweep }
    }
}

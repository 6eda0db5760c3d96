//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Cloned into every handler through Axum's state extraction.
///
/// `DatabaseConnection` is a connection pool, so clones share the same pool.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

//! Shared application state handed to every controller.

use sea_orm::DatabaseConnection;

/// State shared by all routes.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool; writing controllers begin one transaction per request from it.
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

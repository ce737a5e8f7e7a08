use sea_orm::DatabaseConnection;

/// Application state shared across request handlers.
///
/// Initialized once during startup and cloned cheaply for each incoming
/// request via Axum's state extraction. Holds only the database connection
/// pool; there is no other cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

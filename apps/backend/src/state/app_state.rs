use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// The database connection is injected (never reached for as an ambient
/// singleton) so the core stays testable against any backing store.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection pool (optional for handler-only test scenarios)
    db: Option<DatabaseConnection>,
}

impl AppState {
    /// Create a new AppState with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    /// Create a new AppState without a database connection (for testing)
    pub fn new_without_db() -> Self {
        Self { db: None }
    }

    /// Borrow the database connection, if configured
    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}

pub mod txn;
pub mod txn_policy;

use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Centralized helper to access the database connection from AppState.
///
/// Returns a borrowed reference to the DatabaseConnection if available, or
/// an `AppError::DbUnavailable` if the database is not configured.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state
        .db()
        .ok_or_else(|| AppError::db_unavailable("no database configured"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_db_without_db_fails_with_db_unavailable() {
        let state = AppState::new_without_db();
        let result = require_db(&state);
        assert!(matches!(result, Err(AppError::DbUnavailable { .. })));
    }
}

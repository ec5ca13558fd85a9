use std::env;

use crate::error::AppError;

/// Runtime environment the process was started for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    Test,
}

/// Backing database kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    /// PostgreSQL, configured via DATABASE_URL
    Postgres,
    /// In-memory SQLite, for hermetic tests
    SqliteMemory,
}

/// Resolve the database URL for an env/kind combination.
///
/// Prod is postgres-only; an in-memory database would silently lose all
/// state on restart.
pub fn db_url(env: RuntimeEnv, kind: DbKind) -> Result<String, AppError> {
    match (env, kind) {
        (RuntimeEnv::Prod, DbKind::SqliteMemory) => Err(AppError::config(
            "SqliteMemory is not a valid production database".to_string(),
        )),
        (_, DbKind::Postgres) => must_var("DATABASE_URL"),
        (RuntimeEnv::Test, DbKind::SqliteMemory) => Ok("sqlite::memory:".to_string()),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}

#[cfg(test)]
mod tests {
    use super::{db_url, DbKind, RuntimeEnv};

    #[test]
    fn sqlite_memory_is_test_only() {
        assert!(db_url(RuntimeEnv::Prod, DbKind::SqliteMemory).is_err());
        assert_eq!(
            db_url(RuntimeEnv::Test, DbKind::SqliteMemory).unwrap(),
            "sqlite::memory:"
        );
    }

    #[test]
    fn postgres_requires_database_url() {
        // Serialized through the env var name being unique to this test
        std::env::remove_var("DATABASE_URL");
        let result = db_url(RuntimeEnv::Prod, DbKind::Postgres);
        assert!(result.is_err());

        std::env::set_var("DATABASE_URL", "postgresql://gambit:pw@localhost:5432/gambit");
        let url = db_url(RuntimeEnv::Prod, DbKind::Postgres).unwrap();
        assert_eq!(url, "postgresql://gambit:pw@localhost:5432/gambit");
        std::env::remove_var("DATABASE_URL");
    }
}

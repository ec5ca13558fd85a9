//! Database connection bootstrap.
//!
//! The pool is built once at startup and reused for the process lifetime.
//! Readiness is probed with a bounded retry loop so a backend coming up
//! before its database fails loudly after a fixed number of attempts
//! instead of hanging.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbKind, RuntimeEnv};
use crate::error::AppError;

/// Readiness probe attempts, spaced one second apart.
const CONNECT_ATTEMPTS: u32 = 30;

const POOL_MIN_CONNECTIONS: u32 = 1;
const POOL_MAX_CONNECTIONS: u32 = 10;
const POOL_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connect to the database for the given env/kind. Does NOT run migrations.
pub async fn connect_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(env, kind)?;

    let mut options = ConnectOptions::new(database_url);
    match kind {
        DbKind::SqliteMemory => {
            // Each sqlite :memory: connection is its own database; the pool
            // must hold exactly one connection and keep it open.
            options.max_connections(1).min_connections(1);
        }
        DbKind::Postgres => {
            options
                .min_connections(POOL_MIN_CONNECTIONS)
                .max_connections(POOL_MAX_CONNECTIONS)
                // a saturated pool surfaces as a retryable failure, not a hang
                .acquire_timeout(POOL_ACQUIRE_TIMEOUT);
        }
    }
    options.sqlx_logging(false);

    let mut last_err: Option<sea_orm::DbErr> = None;
    for attempt in 1..=CONNECT_ATTEMPTS {
        match Database::connect(options.clone()).await {
            Ok(conn) => match conn.ping().await {
                Ok(()) => {
                    info!(?kind, attempt, "database connected");
                    return Ok(conn);
                }
                Err(e) => {
                    warn!(attempt, error = %e, "database ping failed");
                    last_err = Some(e);
                }
            },
            Err(e) => {
                warn!(attempt, error = %e, "database connect failed");
                last_err = Some(e);
            }
        }
        if attempt < CONNECT_ATTEMPTS {
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    }

    let detail = match last_err {
        Some(e) => format!("database is not ready after {CONNECT_ATTEMPTS} attempts: {e}"),
        None => format!("database is not ready after {CONNECT_ATTEMPTS} attempts"),
    };
    Err(AppError::db_unavailable(detail))
}

/// Connect and bring the schema up to date: the single entrypoint used by
/// `main` and by test state building.
pub async fn bootstrap_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(env, kind).await?;
    migration::migrate(&conn, migration::MigrationCommand::Up)
        .await
        .map_err(|e| AppError::db(format!("migration failed: {e}")))?;
    Ok(conn)
}

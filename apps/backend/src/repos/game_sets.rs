//! Game-set namespace repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::game_sets_sea;
use crate::errors::domain::{map_db_err, DomainError};

/// Check whether a game set exists by name
pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<bool, DomainError> {
    game_sets_sea::exists(conn, name).await.map_err(map_db_err)
}

/// Idempotently create a game set by name
pub async fn create_if_absent<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<(), DomainError> {
    game_sets_sea::create_if_absent(conn, name)
        .await
        .map_err(map_db_err)
}

//! Game-set namespace operations.
//!
//! A game set is nothing but a 6-character token scoping rounds and
//! templates; creation is idempotent and there is no deletion lifecycle.

use sea_orm::ConnectionTrait;

use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::game_sets;

/// Validate and normalize a game-set name: trimmed, exactly 6 characters.
pub fn validate_name(raw: &str) -> Result<String, DomainError> {
    let name = raw.trim();
    if name.chars().count() != 6 {
        return Err(DomainError::validation(
            ValidationKind::InvalidGameSet,
            "Game set name must be exactly 6 characters",
        ));
    }
    Ok(name.to_string())
}

/// Does a game set with this (already validated) name exist?
pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<bool, DomainError> {
    game_sets::exists(conn, name).await
}

/// Idempotently create a game set.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<(), DomainError> {
    game_sets::create_if_absent(conn, name).await
}

//! Repository functions for the domain layer (generic over ConnectionTrait).
//!
//! Repos translate SeaORM models into domain models and `DbErr` into
//! `DomainError`; nothing above this layer touches driver types.

pub mod game_sets;
pub mod items;
pub mod rounds;
pub mod templates;

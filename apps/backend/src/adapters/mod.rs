//! SeaORM adapters: entity-level persistence operations.
//!
//! Adapters speak `sea_orm` types (`Model`, `DbErr`) and nothing above
//! them; repos translate into domain models and `DomainError`.

pub mod game_sets_sea;
pub mod items_sea;
pub mod rounds_sea;
pub mod templates_sea;

//! Pure game core: no HTTP, no persistence.
//!
//! Everything in here operates on plain values so the elimination rules,
//! target selection and reveal policy can be exercised without a database.

pub mod catalog;
pub mod engine;
pub mod kind;
pub mod target;
pub mod team;
pub mod template_rules;
pub mod view;

pub use engine::{resolve_elimination, EliminationOutcome};
pub use kind::{RoundKind, RoundStatus};
pub use team::Team;

#[cfg(test)]
mod tests_props_engine;

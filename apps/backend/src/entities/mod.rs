//! SeaORM entities for the Gambit schema.

pub mod game_sets;
pub mod items;
pub mod rounds;
pub mod template_items;
pub mod templates;

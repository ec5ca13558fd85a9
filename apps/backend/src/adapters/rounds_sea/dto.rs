//! DTOs for rounds_sea adapter.

use crate::entities::rounds::RoundKind;

/// DTO for creating a new round. Status starts active, team 1 acts first,
/// and the target is a nil placeholder until the factory resolves it.
#[derive(Debug, Clone)]
pub struct RoundCreate {
    pub game_set: String,
    pub category: String,
    pub prompt: String,
    pub kind: RoundKind,
    pub image_data: Option<String>,
}

/// DTO for finishing a round. `None`/`None` encodes a draw.
#[derive(Debug, Clone, Copy)]
pub struct RoundFinish {
    pub winner_team: Option<i16>,
    pub loser_team: Option<i16>,
}

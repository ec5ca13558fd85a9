//! Round repository functions for the domain layer.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::adapters::rounds_sea as rounds_adapter;
use crate::domain::kind::{RoundKind, RoundStatus};
use crate::domain::team::Team;
use crate::entities::rounds;
use crate::errors::domain::{map_db_err, DomainError};

/// Round domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub id: Uuid,
    pub game_set: String,
    pub category: String,
    pub prompt: String,
    pub kind: RoundKind,
    pub current_team: Team,
    pub status: RoundStatus,
    pub target_item_id: Uuid,
    pub winner_team: Option<Team>,
    pub loser_team: Option<Team>,
    pub image_data: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Find a round by id, scoped to a game set
pub async fn find_scoped<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
    game_set: &str,
) -> Result<Option<Round>, DomainError> {
    let round = rounds_adapter::find_scoped(conn, round_id, game_set)
        .await
        .map_err(map_db_err)?;
    round.map(Round::try_from).transpose()
}

/// Create a new active round with a placeholder target
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_set: &str,
    category: String,
    prompt: String,
    kind: RoundKind,
    image_data: Option<String>,
) -> Result<Round, DomainError> {
    let dto = rounds_adapter::RoundCreate {
        game_set: game_set.to_string(),
        category,
        prompt,
        kind: kind.into(),
        image_data,
    };
    let round = rounds_adapter::create(conn, dto).await.map_err(map_db_err)?;
    Round::try_from(round)
}

/// Fix the real target item id for a freshly created round
pub async fn set_target<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
    game_set: &str,
    target_item_id: Uuid,
) -> Result<Round, DomainError> {
    let round = rounds_adapter::set_target(conn, round_id, game_set, target_item_id)
        .await
        .map_err(map_db_err)?;
    Round::try_from(round)
}

/// Pass the turn to the given team
pub async fn set_current_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
    game_set: &str,
    team: Team,
) -> Result<Round, DomainError> {
    let round = rounds_adapter::set_current_team(conn, round_id, game_set, team.as_i16())
        .await
        .map_err(map_db_err)?;
    Round::try_from(round)
}

/// Terminally finish a round; `None`/`None` encodes a draw
pub async fn finish<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
    game_set: &str,
    winner_team: Option<Team>,
    loser_team: Option<Team>,
) -> Result<Round, DomainError> {
    let dto = rounds_adapter::RoundFinish {
        winner_team: winner_team.map(Team::as_i16),
        loser_team: loser_team.map(Team::as_i16),
    };
    let round = rounds_adapter::finish(conn, round_id, game_set, dto)
        .await
        .map_err(map_db_err)?;
    Round::try_from(round)
}

// Conversions between SeaORM models and domain models

impl TryFrom<rounds::Model> for Round {
    type Error = DomainError;

    fn try_from(model: rounds::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            game_set: model.game_set,
            category: model.category,
            prompt: model.prompt,
            kind: model.kind.into(),
            current_team: Team::try_from(model.current_team)?,
            status: model.status.into(),
            target_item_id: model.target_item_id,
            winner_team: model.winner_team.map(Team::try_from).transpose()?,
            loser_team: model.loser_team.map(Team::try_from).transpose()?,
            image_data: model.image_data,
            created_at: model.created_at,
        })
    }
}

impl From<rounds::RoundKind> for RoundKind {
    fn from(kind: rounds::RoundKind) -> Self {
        match kind {
            rounds::RoundKind::Rated => RoundKind::Rated,
            rounds::RoundKind::Manual => RoundKind::Manual,
            rounds::RoundKind::Carousel => RoundKind::Carousel,
        }
    }
}

impl From<RoundKind> for rounds::RoundKind {
    fn from(kind: RoundKind) -> Self {
        match kind {
            RoundKind::Rated => rounds::RoundKind::Rated,
            RoundKind::Manual => rounds::RoundKind::Manual,
            RoundKind::Carousel => rounds::RoundKind::Carousel,
        }
    }
}

impl From<rounds::RoundStatus> for RoundStatus {
    fn from(status: rounds::RoundStatus) -> Self {
        match status {
            rounds::RoundStatus::Active => RoundStatus::Active,
            rounds::RoundStatus::Finished => RoundStatus::Finished,
        }
    }
}

impl From<RoundStatus> for rounds::RoundStatus {
    fn from(status: RoundStatus) -> Self {
        match status {
            RoundStatus::Active => rounds::RoundStatus::Active,
            RoundStatus::Finished => rounds::RoundStatus::Finished,
        }
    }
}

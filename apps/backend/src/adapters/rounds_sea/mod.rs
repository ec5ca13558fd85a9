//! SeaORM adapter for rounds.
//!
//! Every lookup and mutation is scoped by `game_set` so a round created
//! under one namespace is indistinguishable from a missing one elsewhere.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::rounds;

pub mod dto;

pub use dto::{RoundCreate, RoundFinish};

/// Find a round by id within a game set
pub async fn find_scoped<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
    game_set: &str,
) -> Result<Option<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find_by_id(round_id)
        .filter(rounds::Column::GameSet.eq(game_set))
        .one(conn)
        .await
}

/// Create a new round with a nil placeholder target
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RoundCreate,
) -> Result<rounds::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let round = rounds::ActiveModel {
        id: Set(Uuid::new_v4()),
        game_set: Set(dto.game_set),
        category: Set(dto.category),
        prompt: Set(dto.prompt),
        kind: Set(dto.kind),
        current_team: Set(1),
        status: Set(rounds::RoundStatus::Active),
        target_item_id: Set(Uuid::nil()),
        winner_team: Set(None),
        loser_team: Set(None),
        image_data: Set(dto.image_data),
        created_at: Set(now),
    };

    round.insert(conn).await
}

/// Fix the real target item id (replaces the creation placeholder)
pub async fn set_target<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
    game_set: &str,
    target_item_id: Uuid,
) -> Result<rounds::Model, sea_orm::DbErr> {
    let round = find_scoped(conn, round_id, game_set)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Round not found".to_string()))?;

    let mut round: rounds::ActiveModel = round.into();
    round.target_item_id = Set(target_item_id);

    round.update(conn).await
}

/// Pass the turn to the given team
pub async fn set_current_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
    game_set: &str,
    team: i16,
) -> Result<rounds::Model, sea_orm::DbErr> {
    let round = find_scoped(conn, round_id, game_set)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Round not found".to_string()))?;

    let mut round: rounds::ActiveModel = round.into();
    round.current_team = Set(team);

    round.update(conn).await
}

/// Terminally finish a round with the given result
pub async fn finish<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
    game_set: &str,
    dto: RoundFinish,
) -> Result<rounds::Model, sea_orm::DbErr> {
    let round = find_scoped(conn, round_id, game_set)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Round not found".to_string()))?;

    let mut round: rounds::ActiveModel = round.into();
    round.status = Set(rounds::RoundStatus::Finished);
    round.winner_team = Set(dto.winner_team);
    round.loser_team = Set(dto.loser_team);

    round.update(conn).await
}

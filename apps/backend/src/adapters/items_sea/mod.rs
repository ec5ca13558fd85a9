//! SeaORM adapter for round items.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::items;

pub mod dto;

pub use dto::ItemCreate;

/// Insert one item into a round
pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ItemCreate,
) -> Result<items::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let item = items::ActiveModel {
        id: Set(Uuid::new_v4()),
        round_id: Set(dto.round_id),
        title: Set(dto.title),
        rating: Set(dto.rating),
        secret_text: Set(dto.secret_text),
        image_data: Set(dto.image_data),
        eliminated: Set(false),
        eliminated_by_team: Set(None),
        created_at: Set(now),
    };

    item.insert(conn).await
}

/// Find an item by id within a round
pub async fn find_in_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    item_id: Uuid,
    round_id: Uuid,
) -> Result<Option<items::Model>, sea_orm::DbErr> {
    items::Entity::find_by_id(item_id)
        .filter(items::Column::RoundId.eq(round_id))
        .one(conn)
        .await
}

/// All items of a round, ordered by title
pub async fn list_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
) -> Result<Vec<items::Model>, sea_orm::DbErr> {
    items::Entity::find()
        .filter(items::Column::RoundId.eq(round_id))
        .order_by_asc(items::Column::Title)
        .all(conn)
        .await
}

/// Ids of the non-eliminated items of a round
pub async fn remaining_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
) -> Result<Vec<Uuid>, sea_orm::DbErr> {
    let remaining = items::Entity::find()
        .filter(items::Column::RoundId.eq(round_id))
        .filter(items::Column::Eliminated.eq(false))
        .all(conn)
        .await?;
    Ok(remaining.into_iter().map(|m| m.id).collect())
}

/// Mark an item eliminated and stamp the acting team.
/// The eliminated flag is one-way; callers check it before calling.
pub async fn mark_eliminated<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    item_id: Uuid,
    round_id: Uuid,
    team: i16,
) -> Result<items::Model, sea_orm::DbErr> {
    let item = find_in_round(conn, item_id, round_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Item not found".to_string()))?;

    let mut item: items::ActiveModel = item.into();
    item.eliminated = Set(true);
    item.eliminated_by_team = Set(Some(team));

    item.update(conn).await
}

//! SeaORM adapter for game-set namespaces.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::game_sets;

/// Check whether a game set with this name exists.
pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<bool, sea_orm::DbErr> {
    let found = game_sets::Entity::find()
        .filter(game_sets::Column::Name.eq(name))
        .one(conn)
        .await?;
    Ok(found.is_some())
}

/// Create a game set if absent. Idempotent: conflicts on the unique name
/// are silently ignored.
pub async fn create_if_absent<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<(), sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let game_set = game_sets::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        created_at: Set(now),
    };

    game_sets::Entity::insert(game_set)
        .on_conflict(
            OnConflict::column(game_sets::Column::Name)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

//! Item repository functions for the domain layer.

use rust_decimal::Decimal;
use sea_orm::ConnectionTrait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::adapters::items_sea as items_adapter;
use crate::domain::team::Team;
use crate::entities::items;
use crate::errors::domain::{map_db_err, DomainError};

/// Item domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub round_id: Uuid,
    pub title: String,
    pub rating: Option<Decimal>,
    pub secret_text: Option<String>,
    pub image_data: Option<String>,
    pub eliminated: bool,
    pub eliminated_by_team: Option<Team>,
    pub created_at: OffsetDateTime,
}

/// Insert one item into a round
pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
    title: String,
    rating: Option<Decimal>,
    secret_text: Option<String>,
    image_data: Option<String>,
) -> Result<Item, DomainError> {
    let dto = items_adapter::ItemCreate {
        round_id,
        title,
        rating,
        secret_text,
        image_data,
    };
    let item = items_adapter::insert(conn, dto).await.map_err(map_db_err)?;
    Item::try_from(item)
}

/// Find an item by id within a round
pub async fn find_in_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    item_id: Uuid,
    round_id: Uuid,
) -> Result<Option<Item>, DomainError> {
    let item = items_adapter::find_in_round(conn, item_id, round_id)
        .await
        .map_err(map_db_err)?;
    item.map(Item::try_from).transpose()
}

/// All items of a round, ordered by title
pub async fn list_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
) -> Result<Vec<Item>, DomainError> {
    let items = items_adapter::list_by_round(conn, round_id)
        .await
        .map_err(map_db_err)?;
    items.into_iter().map(Item::try_from).collect()
}

/// Ids of the non-eliminated items of a round
pub async fn remaining_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: Uuid,
) -> Result<Vec<Uuid>, DomainError> {
    items_adapter::remaining_ids(conn, round_id)
        .await
        .map_err(map_db_err)
}

/// Mark an item eliminated by the acting team (one-way transition)
pub async fn eliminate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    item_id: Uuid,
    round_id: Uuid,
    team: Team,
) -> Result<Item, DomainError> {
    let item = items_adapter::mark_eliminated(conn, item_id, round_id, team.as_i16())
        .await
        .map_err(map_db_err)?;
    Item::try_from(item)
}

// Conversions between SeaORM models and domain models

impl TryFrom<items::Model> for Item {
    type Error = DomainError;

    fn try_from(model: items::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            round_id: model.round_id,
            title: model.title,
            rating: model.rating,
            secret_text: model.secret_text,
            image_data: model.image_data,
            eliminated: model.eliminated,
            eliminated_by_team: model.eliminated_by_team.map(Team::try_from).transpose()?,
            created_at: model.created_at,
        })
    }
}

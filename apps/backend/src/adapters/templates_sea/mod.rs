//! SeaORM adapter for templates and their items.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::{template_items, templates};

pub mod dto;

pub use dto::{TemplateCreate, TemplateItemInsert, TemplateUpdate};

/// Find a template by id within a game set
pub async fn find_scoped<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    template_id: Uuid,
    game_set: &str,
) -> Result<Option<templates::Model>, sea_orm::DbErr> {
    templates::Entity::find_by_id(template_id)
        .filter(templates::Column::GameSet.eq(game_set))
        .one(conn)
        .await
}

/// All templates of a game set, most recently touched first
pub async fn list_scoped<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_set: &str,
) -> Result<Vec<templates::Model>, sea_orm::DbErr> {
    templates::Entity::find()
        .filter(templates::Column::GameSet.eq(game_set))
        .order_by_desc(templates::Column::UpdatedAt)
        .order_by_desc(templates::Column::CreatedAt)
        .all(conn)
        .await
}

/// Create a template header
pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TemplateCreate,
) -> Result<templates::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let template = templates::ActiveModel {
        id: Set(Uuid::new_v4()),
        game_set: Set(dto.game_set),
        name: Set(dto.name),
        prompt: Set(dto.prompt),
        kind: Set(dto.kind),
        image_data: Set(dto.image_data),
        created_at: Set(now),
        updated_at: Set(now),
    };

    template.insert(conn).await
}

/// Update a template header; returns None when the id is absent from this
/// game set
pub async fn update_scoped<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    template_id: Uuid,
    game_set: &str,
    dto: TemplateUpdate,
) -> Result<Option<templates::Model>, sea_orm::DbErr> {
    let Some(template) = find_scoped(conn, template_id, game_set).await? else {
        return Ok(None);
    };

    let mut template: templates::ActiveModel = template.into();
    template.name = Set(dto.name);
    template.prompt = Set(dto.prompt);
    template.kind = Set(dto.kind);
    template.image_data = Set(dto.image_data);
    template.updated_at = Set(time::OffsetDateTime::now_utc());

    Ok(Some(template.update(conn).await?))
}

/// Delete a template (items cascade); returns affected row count
pub async fn delete_scoped<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    template_id: Uuid,
    game_set: &str,
) -> Result<u64, sea_orm::DbErr> {
    let result = templates::Entity::delete_many()
        .filter(templates::Column::Id.eq(template_id))
        .filter(templates::Column::GameSet.eq(game_set))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Items of a template, ordered by title
pub async fn list_items<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    template_id: Uuid,
) -> Result<Vec<template_items::Model>, sea_orm::DbErr> {
    template_items::Entity::find()
        .filter(template_items::Column::TemplateId.eq(template_id))
        .order_by_asc(template_items::Column::Title)
        .all(conn)
        .await
}

/// Item counts per template, for list summaries
pub async fn count_items<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    template_ids: &[Uuid],
) -> Result<Vec<(Uuid, i64)>, sea_orm::DbErr> {
    if template_ids.is_empty() {
        return Ok(Vec::new());
    }
    template_items::Entity::find()
        .select_only()
        .column(template_items::Column::TemplateId)
        .column_as(template_items::Column::Id.count(), "item_count")
        .filter(template_items::Column::TemplateId.is_in(template_ids.iter().copied()))
        .group_by(template_items::Column::TemplateId)
        .into_tuple::<(Uuid, i64)>()
        .all(conn)
        .await
}

/// Insert one template item
pub async fn insert_item<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TemplateItemInsert,
) -> Result<template_items::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let item = template_items::ActiveModel {
        id: Set(Uuid::new_v4()),
        template_id: Set(dto.template_id),
        title: Set(dto.title),
        rating: Set(dto.rating),
        secret_text: Set(dto.secret_text),
        is_target: Set(dto.is_target),
        image_data: Set(dto.image_data),
        created_at: Set(now),
    };

    item.insert(conn).await
}

/// Remove all items of a template (first half of a full replace)
pub async fn delete_items<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    template_id: Uuid,
) -> Result<u64, sea_orm::DbErr> {
    let result = template_items::Entity::delete_many()
        .filter(template_items::Column::TemplateId.eq(template_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

//! Template repository functions for the domain layer.

use rust_decimal::Decimal;
use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::adapters::templates_sea as templates_adapter;
use crate::domain::kind::RoundKind;
use crate::entities::{template_items, templates};
use crate::errors::domain::{map_db_err, DomainError};

/// Template domain model (header only; items load separately)
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: Uuid,
    pub game_set: String,
    pub name: String,
    pub prompt: String,
    pub kind: RoundKind,
    pub image_data: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Template item domain model
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateItem {
    pub id: Uuid,
    pub template_id: Uuid,
    pub title: String,
    pub rating: Option<Decimal>,
    pub secret_text: Option<String>,
    pub is_target: bool,
    pub image_data: Option<String>,
}

/// One row of the template list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateSummary {
    pub id: Uuid,
    pub name: String,
    pub prompt: String,
    pub kind: RoundKind,
    pub item_count: i64,
}

/// Find a template header by id, scoped to a game set
pub async fn find_scoped<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    template_id: Uuid,
    game_set: &str,
) -> Result<Option<Template>, DomainError> {
    let template = templates_adapter::find_scoped(conn, template_id, game_set)
        .await
        .map_err(map_db_err)?;
    Ok(template.map(Template::from))
}

/// Find a template with its items, scoped to a game set
pub async fn find_full<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    template_id: Uuid,
    game_set: &str,
) -> Result<Option<(Template, Vec<TemplateItem>)>, DomainError> {
    let Some(template) = find_scoped(conn, template_id, game_set).await? else {
        return Ok(None);
    };
    let items = templates_adapter::list_items(conn, template_id)
        .await
        .map_err(map_db_err)?;
    Ok(Some((
        template,
        items.into_iter().map(TemplateItem::from).collect(),
    )))
}

/// Template list with item counts, most recently touched first
pub async fn list_summaries<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_set: &str,
) -> Result<Vec<TemplateSummary>, DomainError> {
    let templates = templates_adapter::list_scoped(conn, game_set)
        .await
        .map_err(map_db_err)?;
    let ids: Vec<Uuid> = templates.iter().map(|t| t.id).collect();
    let counts = templates_adapter::count_items(conn, &ids)
        .await
        .map_err(map_db_err)?;

    Ok(templates
        .into_iter()
        .map(|t| {
            let item_count = counts
                .iter()
                .find(|(id, _)| *id == t.id)
                .map(|(_, n)| *n)
                .unwrap_or(0);
            TemplateSummary {
                id: t.id,
                name: t.name,
                prompt: t.prompt,
                kind: t.kind.into(),
                item_count,
            }
        })
        .collect())
}

/// Create a template header
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_set: &str,
    name: String,
    prompt: String,
    kind: RoundKind,
    image_data: Option<String>,
) -> Result<Template, DomainError> {
    let dto = templates_adapter::TemplateCreate {
        game_set: game_set.to_string(),
        name,
        prompt,
        kind: kind.into(),
        image_data,
    };
    let template = templates_adapter::insert(conn, dto)
        .await
        .map_err(map_db_err)?;
    Ok(Template::from(template))
}

/// Update a template header; None when absent from this game set
pub async fn update_scoped<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    template_id: Uuid,
    game_set: &str,
    name: String,
    prompt: String,
    kind: RoundKind,
    image_data: Option<String>,
) -> Result<Option<Template>, DomainError> {
    let dto = templates_adapter::TemplateUpdate {
        name,
        prompt,
        kind: kind.into(),
        image_data,
    };
    let template = templates_adapter::update_scoped(conn, template_id, game_set, dto)
        .await
        .map_err(map_db_err)?;
    Ok(template.map(Template::from))
}

/// Delete a template (items cascade); true when a row was removed
pub async fn delete_scoped<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    template_id: Uuid,
    game_set: &str,
) -> Result<bool, DomainError> {
    let deleted = templates_adapter::delete_scoped(conn, template_id, game_set)
        .await
        .map_err(map_db_err)?;
    Ok(deleted > 0)
}

/// Insert one template item
pub async fn insert_item<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    template_id: Uuid,
    title: String,
    rating: Option<Decimal>,
    secret_text: Option<String>,
    is_target: bool,
    image_data: Option<String>,
) -> Result<TemplateItem, DomainError> {
    let dto = templates_adapter::TemplateItemInsert {
        template_id,
        title,
        rating,
        secret_text,
        is_target,
        image_data,
    };
    let item = templates_adapter::insert_item(conn, dto)
        .await
        .map_err(map_db_err)?;
    Ok(TemplateItem::from(item))
}

/// Remove all items of a template (first half of a full replace)
pub async fn delete_items<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    template_id: Uuid,
) -> Result<(), DomainError> {
    templates_adapter::delete_items(conn, template_id)
        .await
        .map_err(map_db_err)?;
    Ok(())
}

// Conversions between SeaORM models and domain models

impl From<templates::Model> for Template {
    fn from(model: templates::Model) -> Self {
        Self {
            id: model.id,
            game_set: model.game_set,
            name: model.name,
            prompt: model.prompt,
            kind: model.kind.into(),
            image_data: model.image_data,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<template_items::Model> for TemplateItem {
    fn from(model: template_items::Model) -> Self {
        Self {
            id: model.id,
            template_id: model.template_id,
            title: model.title,
            rating: model.rating,
            secret_text: model.secret_text,
            is_target: model.is_target,
            image_data: model.image_data,
        }
    }
}

//! Template CRUD.
//!
//! Updating a template fully replaces its item collection (delete then
//! reinsert); there is no item-level diffing.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::kind::RoundKind;
use crate::domain::template_rules::{self, TemplateItemDraft};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::templates;

pub use crate::repos::templates::TemplateSummary;

const MAX_NAME_LEN: usize = 120;
const MAX_PROMPT_LEN: usize = 300;

/// Create/update payload for a template.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatePayload {
    #[serde(default = "default_kind")]
    pub kind: RoundKind,
    pub name: String,
    pub prompt: String,
    pub items: Vec<TemplateItemDraft>,
    #[serde(default)]
    pub image_data: Option<String>,
}

fn default_kind() -> RoundKind {
    RoundKind::Rated
}

/// Full template representation returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateOut {
    pub id: Uuid,
    pub name: String,
    pub prompt: String,
    pub kind: RoundKind,
    pub items: Vec<TemplateItemDraft>,
    pub image_data: Option<String>,
}

/// Template list, most recently touched first.
pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_set: &str,
) -> Result<Vec<TemplateSummary>, DomainError> {
    templates::list_summaries(conn, game_set).await
}

/// Load a template with its items.
pub async fn get<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_set: &str,
    template_id: Uuid,
) -> Result<TemplateOut, DomainError> {
    let (template, items) = templates::find_full(conn, template_id, game_set)
        .await?
        .ok_or_else(|| not_found(template_id))?;
    Ok(to_out(template, items))
}

/// Validate and save a new template.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_set: &str,
    payload: TemplatePayload,
) -> Result<TemplateOut, DomainError> {
    validate_payload(&payload)?;
    let template = templates::create(
        conn,
        game_set,
        payload.name.trim().to_string(),
        payload.prompt.trim().to_string(),
        payload.kind,
        payload.image_data.clone(),
    )
    .await?;
    replace_items(conn, template.id, payload.kind, &payload.items).await?;
    get(conn, game_set, template.id).await
}

/// Validate and save over an existing template, replacing its items.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_set: &str,
    template_id: Uuid,
    payload: TemplatePayload,
) -> Result<TemplateOut, DomainError> {
    validate_payload(&payload)?;
    templates::update_scoped(
        conn,
        template_id,
        game_set,
        payload.name.trim().to_string(),
        payload.prompt.trim().to_string(),
        payload.kind,
        payload.image_data.clone(),
    )
    .await?
    .ok_or_else(|| not_found(template_id))?;
    replace_items(conn, template_id, payload.kind, &payload.items).await?;
    get(conn, game_set, template_id).await
}

/// Delete a template and (by cascade) its items.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_set: &str,
    template_id: Uuid,
) -> Result<(), DomainError> {
    let deleted = templates::delete_scoped(conn, template_id, game_set).await?;
    if !deleted {
        return Err(not_found(template_id));
    }
    Ok(())
}

fn not_found(template_id: Uuid) -> DomainError {
    DomainError::not_found(
        NotFoundKind::Template,
        format!("Template {template_id} not found"),
    )
}

fn validate_payload(payload: &TemplatePayload) -> Result<(), DomainError> {
    let name_len = payload.name.trim().chars().count();
    if name_len == 0 || name_len > MAX_NAME_LEN {
        return Err(DomainError::validation(
            ValidationKind::Other("TemplateName".into()),
            format!("Template name must be 1..={MAX_NAME_LEN} characters"),
        ));
    }
    let prompt_len = payload.prompt.trim().chars().count();
    if prompt_len == 0 || prompt_len > MAX_PROMPT_LEN {
        return Err(DomainError::validation(
            ValidationKind::Other("TemplatePrompt".into()),
            format!("Template prompt must be 1..={MAX_PROMPT_LEN} characters"),
        ));
    }
    template_rules::validate(payload.kind, &payload.items)
}

/// Delete-then-reinsert the item collection, normalizing fields per kind:
/// ratings only survive on rated templates, hidden text and target flags
/// only on manual/carousel ones.
async fn replace_items<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    template_id: Uuid,
    kind: RoundKind,
    items: &[TemplateItemDraft],
) -> Result<(), DomainError> {
    templates::delete_items(conn, template_id).await?;
    for item in items {
        let rating = if kind == RoundKind::Rated {
            item.rating
        } else {
            None
        };
        let secret_text = if kind.is_manual_like() {
            item.secret_text
                .as_ref()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        } else {
            None
        };
        let is_target = kind.is_manual_like() && item.is_target;
        templates::insert_item(
            conn,
            template_id,
            item.title.trim().to_string(),
            rating,
            secret_text,
            is_target,
            item.image_data.clone(),
        )
        .await?;
    }
    Ok(())
}

fn to_out(template: templates::Template, items: Vec<templates::TemplateItem>) -> TemplateOut {
    TemplateOut {
        id: template.id,
        name: template.name,
        prompt: template.prompt,
        kind: template.kind,
        items: items
            .into_iter()
            .map(|it| TemplateItemDraft {
                title: it.title,
                rating: it.rating,
                secret_text: it.secret_text,
                is_target: it.is_target,
                image_data: it.image_data,
            })
            .collect(),
        image_data: template.image_data,
    }
}

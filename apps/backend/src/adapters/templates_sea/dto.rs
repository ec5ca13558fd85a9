//! DTOs for templates_sea adapter.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::entities::rounds::RoundKind;

/// DTO for creating a template header (items are inserted separately).
#[derive(Debug, Clone)]
pub struct TemplateCreate {
    pub game_set: String,
    pub name: String,
    pub prompt: String,
    pub kind: RoundKind,
    pub image_data: Option<String>,
}

/// DTO for updating a template header in place.
#[derive(Debug, Clone)]
pub struct TemplateUpdate {
    pub name: String,
    pub prompt: String,
    pub kind: RoundKind,
    pub image_data: Option<String>,
}

/// DTO for inserting one template item.
#[derive(Debug, Clone)]
pub struct TemplateItemInsert {
    pub template_id: Uuid,
    pub title: String,
    pub rating: Option<Decimal>,
    pub secret_text: Option<String>,
    pub is_target: bool,
    pub image_data: Option<String>,
}

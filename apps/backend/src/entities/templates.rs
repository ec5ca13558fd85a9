use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::rounds::RoundKind;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "templates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "game_set")]
    pub game_set: String,
    pub name: String,
    pub prompt: String,
    pub kind: RoundKind,
    #[sea_orm(column_name = "image_data", column_type = "Text", nullable)]
    pub image_data: Option<String>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::template_items::Entity")]
    TemplateItems,
}

impl Related<super::template_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TemplateItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

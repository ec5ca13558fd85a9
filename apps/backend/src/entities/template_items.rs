use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "template_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "template_id")]
    pub template_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Decimal(Some((6, 2)))", nullable)]
    pub rating: Option<Decimal>,
    #[sea_orm(column_name = "secret_text", column_type = "Text", nullable)]
    pub secret_text: Option<String>,
    #[sea_orm(column_name = "is_target")]
    pub is_target: bool,
    #[sea_orm(column_name = "image_data", column_type = "Text", nullable)]
    pub image_data: Option<String>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::templates::Entity",
        from = "Column::TemplateId",
        to = "super::templates::Column::Id"
    )]
    Template,
}

impl Related<super::templates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Template.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

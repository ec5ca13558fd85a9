use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "round_id")]
    pub round_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Decimal(Some((6, 2)))", nullable)]
    pub rating: Option<Decimal>,
    #[sea_orm(column_name = "secret_text", column_type = "Text", nullable)]
    pub secret_text: Option<String>,
    #[sea_orm(column_name = "image_data", column_type = "Text", nullable)]
    pub image_data: Option<String>,
    pub eliminated: bool,
    #[sea_orm(
        column_name = "eliminated_by_team",
        column_type = "SmallInteger",
        nullable
    )]
    pub eliminated_by_team: Option<i16>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rounds::Entity",
        from = "Column::RoundId",
        to = "super::rounds::Column::Id"
    )]
    Round,
}

impl Related<super::rounds::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Round.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

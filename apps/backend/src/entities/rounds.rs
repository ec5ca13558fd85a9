use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RoundKind {
    #[sea_orm(string_value = "rated")]
    Rated,
    #[sea_orm(string_value = "manual")]
    Manual,
    #[sea_orm(string_value = "carousel")]
    Carousel,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RoundStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "finished")]
    Finished,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rounds")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "game_set")]
    pub game_set: String,
    pub category: String,
    pub prompt: String,
    pub kind: RoundKind,
    #[sea_orm(column_name = "current_team", column_type = "SmallInteger")]
    pub current_team: i16,
    pub status: RoundStatus,
    #[sea_orm(column_name = "target_item_id")]
    pub target_item_id: Uuid,
    #[sea_orm(column_name = "winner_team", column_type = "SmallInteger", nullable)]
    pub winner_team: Option<i16>,
    #[sea_orm(column_name = "loser_team", column_type = "SmallInteger", nullable)]
    pub loser_team: Option<i16>,
    #[sea_orm(column_name = "image_data", column_type = "Text", nullable)]
    pub image_data: Option<String>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::items::Entity")]
    Items,
}

impl Related<super::items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

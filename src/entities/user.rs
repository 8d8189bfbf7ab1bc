use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::diary::Entity")]
    Diary,
    #[sea_orm(has_many = "super::today_comment::Entity")]
    TodayComment,
    #[sea_orm(has_many = "super::emotion_statistics::Entity")]
    EmotionStatistics,
}

impl Related<super::diary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Diary.def()
    }
}

impl Related<super::today_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TodayComment.def()
    }
}

impl Related<super::emotion_statistics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmotionStatistics.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

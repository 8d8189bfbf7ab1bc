use crate::emotion::Emotion;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "emotion_statistics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i32,
    pub year: i32,
    pub month: i32,
    pub joy: i64,
    pub excitement: i64,
    pub happiness: i64,
    pub calm: i64,
    pub depression: i64,
    pub anxiety: i64,
    pub sadness: i64,
    pub anger: i64,
}

impl Model {
    pub fn count(&self, emotion: Emotion) -> i64 {
        match emotion {
            Emotion::Joy => self.joy,
            Emotion::Excitement => self.excitement,
            Emotion::Happiness => self.happiness,
            Emotion::Calm => self.calm,
            Emotion::Depression => self.depression,
            Emotion::Anxiety => self.anxiety,
            Emotion::Sadness => self.sadness,
            Emotion::Anger => self.anger,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

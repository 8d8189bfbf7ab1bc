use super::{
    DiaryRepository, InsertOutcome, StatisticsRepository, TodayCommentRepository, UserRepository,
};
use crate::entities::{
    diary, emotion_statistics, today_comment, user, Diary, EmotionStatistics, TodayComment, User,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

pub struct SeaOrmRepository {
    db: DatabaseConnection,
}

impl SeaOrmRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmRepository {
    async fn find_by_id(&self, user_id: i32) -> Result<Option<user::Model>, DbErr> {
        User::find_by_id(user_id).one(&self.db).await
    }
}

#[async_trait]
impl DiaryRepository for SeaOrmRepository {
    async fn find_latest_by_user(&self, user_id: i32) -> Result<Option<diary::Model>, DbErr> {
        Diary::find()
            .filter(diary::Column::UserId.eq(user_id))
            .order_by_desc(diary::Column::Date)
            .order_by_desc(diary::Column::Id)
            .one(&self.db)
            .await
    }
}

#[async_trait]
impl TodayCommentRepository for SeaOrmRepository {
    async fn exists_by_date(&self, date: NaiveDate) -> Result<bool, DbErr> {
        let count = TodayComment::find()
            .filter(today_comment::Column::Date.eq(date))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Option<today_comment::Model>, DbErr> {
        TodayComment::find()
            .filter(today_comment::Column::Date.eq(date))
            .one(&self.db)
            .await
    }

    async fn insert(
        &self,
        comment: today_comment::Model,
    ) -> Result<InsertOutcome<today_comment::Model>, DbErr> {
        let active = today_comment::ActiveModel {
            id: Set(comment.id),
            user_id: Set(comment.user_id),
            date: Set(comment.date),
            comment: Set(comment.comment.clone()),
            created_at: Set(comment.created_at),
        };
        let res = TodayComment::insert(active)
            .on_conflict(
                OnConflict::column(today_comment::Column::Date)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&self.db)
            .await;

        match res {
            Ok(_) => Ok(InsertOutcome::Inserted(comment)),
            Err(DbErr::RecordNotInserted) => {
                tracing::debug!(date = %comment.date, "today comment insert hit unique date");
                Ok(InsertOutcome::Conflict)
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl StatisticsRepository for SeaOrmRepository {
    async fn find_by_user_and_month(
        &self,
        user_id: i32,
        year: i32,
        month: u32,
    ) -> Result<Option<emotion_statistics::Model>, DbErr> {
        EmotionStatistics::find()
            .filter(emotion_statistics::Column::UserId.eq(user_id))
            .filter(emotion_statistics::Column::Year.eq(year))
            .filter(emotion_statistics::Column::Month.eq(month as i32))
            .one(&self.db)
            .await
    }
}

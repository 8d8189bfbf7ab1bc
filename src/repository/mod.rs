//! Persistence seams used by the services.
//!
//! Each trait covers one aggregate. `SeaOrmRepository` implements all of them
//! over a single `DatabaseConnection`; tests substitute in-memory fakes.

use crate::entities::{diary, emotion_statistics, today_comment, user};
use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::DbErr;

mod postgres;

pub use postgres::SeaOrmRepository;

/// Result of a conflict-aware insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome<T> {
    Inserted(T),
    /// A row with the same unique key already exists; nothing was written.
    Conflict,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, user_id: i32) -> Result<Option<user::Model>, DbErr>;
}

#[async_trait]
pub trait DiaryRepository: Send + Sync {
    /// Most recent entry by date (ties resolved by highest id).
    async fn find_latest_by_user(&self, user_id: i32) -> Result<Option<diary::Model>, DbErr>;
}

#[async_trait]
pub trait TodayCommentRepository: Send + Sync {
    async fn exists_by_date(&self, date: NaiveDate) -> Result<bool, DbErr>;

    async fn find_by_date(&self, date: NaiveDate) -> Result<Option<today_comment::Model>, DbErr>;

    async fn insert(
        &self,
        comment: today_comment::Model,
    ) -> Result<InsertOutcome<today_comment::Model>, DbErr>;
}

#[async_trait]
pub trait StatisticsRepository: Send + Sync {
    async fn find_by_user_and_month(
        &self,
        user_id: i32,
        year: i32,
        month: u32,
    ) -> Result<Option<emotion_statistics::Model>, DbErr>;
}

use super::ranking::{top_three, EmotionCount};
use super::today_comment::TodayCommentService;
use crate::emotion::Emotion;
use crate::entities::diary;
use crate::error::{AppError, AppResult};
use crate::repository::{
    DiaryRepository, StatisticsRepository, TodayCommentRepository, UserRepository,
};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiaryResponse {
    pub id: i64,
    pub content: String,
    pub date: NaiveDate,
    pub emotion: Emotion,
}

impl From<diary::Model> for DiaryResponse {
    fn from(diary: diary::Model) -> Self {
        Self {
            id: diary.id,
            content: diary.content,
            date: diary.date,
            emotion: diary.emotion,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MainPageResponse {
    pub today_comment: Option<String>,
    pub diary: Option<DiaryResponse>,
    pub top_emotions: Option<Vec<EmotionCount>>,
}

pub struct MainPageService {
    users: Arc<dyn UserRepository>,
    diaries: Arc<dyn DiaryRepository>,
    statistics: Arc<dyn StatisticsRepository>,
    today_comments: TodayCommentService,
}

impl MainPageService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        diaries: Arc<dyn DiaryRepository>,
        comments: Arc<dyn TodayCommentRepository>,
        statistics: Arc<dyn StatisticsRepository>,
    ) -> Self {
        Self {
            users,
            diaries,
            statistics,
            today_comments: TodayCommentService::new(comments),
        }
    }

    /// Builds the service with one repository serving every aggregate.
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: UserRepository
            + DiaryRepository
            + TodayCommentRepository
            + StatisticsRepository
            + 'static,
    {
        Self::new(repo.clone(), repo.clone(), repo.clone(), repo)
    }

    pub async fn get_main_page(&self, user_id: i32) -> AppResult<MainPageResponse> {
        self.get_main_page_on(user_id, Local::now().date_naive()).await
    }

    /// Main page as of `today` (server local calendar date in production).
    #[tracing::instrument(skip(self))]
    pub async fn get_main_page_on(
        &self,
        user_id: i32,
        today: NaiveDate,
    ) -> AppResult<MainPageResponse> {
        crate::metrics::increment_main_page_requests();

        // 1. User
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::UserNotFound(user_id))?;

        // 2. Today's comment
        let today_comment = self.today_comments.get_or_create(&user, today).await?;

        // 3. Latest diary
        let diary = self
            .diaries
            .find_latest_by_user(user_id)
            .await?
            .map(DiaryResponse::from);

        // 4. Monthly ranking
        let statistics = self
            .statistics
            .find_by_user_and_month(user_id, today.year(), today.month())
            .await?;
        let top_emotions = top_three(statistics.as_ref());

        tracing::debug!(
            has_diary = diary.is_some(),
            has_statistics = top_emotions.is_some(),
            "main page assembled"
        );

        Ok(MainPageResponse {
            today_comment: today_comment.comment,
            diary,
            top_emotions,
        })
    }
}

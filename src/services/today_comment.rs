use crate::entities::{today_comment, user};
use crate::error::{AppError, AppResult};
use crate::repository::{InsertOutcome, TodayCommentRepository};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Keeps exactly one `today_comments` row per calendar date.
pub struct TodayCommentService {
    comments: Arc<dyn TodayCommentRepository>,
}

impl TodayCommentService {
    pub fn new(comments: Arc<dyn TodayCommentRepository>) -> Self {
        Self { comments }
    }

    /// Returns the comment for `today`, creating an empty one owned by `user`
    /// on the first request of the day.
    ///
    /// If a concurrent request wins the insert, its row is returned instead.
    #[tracing::instrument(skip(self, user), fields(user_id = user.id))]
    pub async fn get_or_create(
        &self,
        user: &user::Model,
        today: NaiveDate,
    ) -> AppResult<today_comment::Model> {
        if !self.comments.exists_by_date(today).await? {
            let comment = today_comment::Model {
                id: Uuid::new_v4(),
                user_id: user.id,
                date: today,
                comment: None,
                created_at: Utc::now().naive_utc(),
            };

            match self.comments.insert(comment).await? {
                InsertOutcome::Inserted(created) => {
                    tracing::info!(comment_id = %created.id, "created today comment");
                    crate::metrics::increment_today_comments_created();
                    return Ok(created);
                }
                InsertOutcome::Conflict => {
                    tracing::info!("today comment created concurrently, loading existing row");
                }
            }
        }

        self.comments
            .find_by_date(today)
            .await?
            .ok_or(AppError::TodayCommentNotFound(today))
    }
}

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use diary_server::emotion::Emotion;
use diary_server::entities::{diary, emotion_statistics, today_comment, user};
use diary_server::gemini::{GeminiError, TextGeneration};
use diary_server::repository::{
    DiaryRepository, InsertOutcome, StatisticsRepository, TodayCommentRepository, UserRepository,
};
use sea_orm::DbErr;
use std::sync::Mutex;
use uuid::Uuid;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn timestamp() -> NaiveDateTime {
    date(2026, 10, 1).and_hms_opt(9, 0, 0).unwrap()
}

pub fn user(id: i32) -> user::Model {
    user::Model {
        id,
        email: format!("user{id}@example.com"),
        name: format!("user {id}"),
        created_at: timestamp(),
    }
}

pub fn diary(id: i64, user_id: i32, on: NaiveDate, emotion: Emotion) -> diary::Model {
    diary::Model {
        id,
        user_id,
        content: format!("diary {id}"),
        date: on,
        emotion,
        created_at: timestamp(),
    }
}

pub fn statistics(user_id: i32, year: i32, month: i32) -> emotion_statistics::Model {
    emotion_statistics::Model {
        id: 1,
        user_id,
        year,
        month,
        joy: 0,
        excitement: 0,
        happiness: 0,
        calm: 0,
        depression: 0,
        anxiety: 0,
        sadness: 0,
        anger: 0,
    }
}

pub fn today_comment(user_id: i32, on: NaiveDate, text: Option<&str>) -> today_comment::Model {
    today_comment::Model {
        id: Uuid::new_v4(),
        user_id,
        date: on,
        comment: text.map(str::to_string),
        created_at: timestamp(),
    }
}

/// In-memory stand-in for every repository trait.
#[derive(Default)]
pub struct InMemoryRepository {
    pub users: Mutex<Vec<user::Model>>,
    pub diaries: Mutex<Vec<diary::Model>>,
    pub comments: Mutex<Vec<today_comment::Model>>,
    pub statistics: Mutex<Vec<emotion_statistics::Model>>,
    /// Row a concurrent request inserts just before ours; the next insert
    /// stores it and reports a conflict.
    pub race_winner: Mutex<Option<today_comment::Model>>,
    /// Simulates an existence check that disagrees with the fetch.
    pub phantom_comment: Mutex<bool>,
    pub inserts: Mutex<usize>,
}

impl InMemoryRepository {
    pub fn with_user(id: i32) -> Self {
        let repo = Self::default();
        repo.users.lock().unwrap().push(user(id));
        repo
    }

    pub fn comment_count(&self) -> usize {
        self.comments.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn find_by_id(&self, user_id: i32) -> Result<Option<user::Model>, DbErr> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == user_id).cloned())
    }
}

#[async_trait]
impl DiaryRepository for InMemoryRepository {
    async fn find_latest_by_user(&self, user_id: i32) -> Result<Option<diary::Model>, DbErr> {
        Ok(self
            .diaries
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.user_id == user_id)
            .max_by_key(|d| (d.date, d.id))
            .cloned())
    }
}

#[async_trait]
impl TodayCommentRepository for InMemoryRepository {
    async fn exists_by_date(&self, on: NaiveDate) -> Result<bool, DbErr> {
        if *self.phantom_comment.lock().unwrap() {
            return Ok(true);
        }
        Ok(self.comments.lock().unwrap().iter().any(|c| c.date == on))
    }

    async fn find_by_date(&self, on: NaiveDate) -> Result<Option<today_comment::Model>, DbErr> {
        Ok(self.comments.lock().unwrap().iter().find(|c| c.date == on).cloned())
    }

    async fn insert(
        &self,
        comment: today_comment::Model,
    ) -> Result<InsertOutcome<today_comment::Model>, DbErr> {
        *self.inserts.lock().unwrap() += 1;

        let mut comments = self.comments.lock().unwrap();
        if let Some(winner) = self.race_winner.lock().unwrap().take() {
            comments.push(winner);
        }
        if comments.iter().any(|c| c.date == comment.date) {
            return Ok(InsertOutcome::Conflict);
        }
        comments.push(comment.clone());
        Ok(InsertOutcome::Inserted(comment))
    }
}

#[async_trait]
impl StatisticsRepository for InMemoryRepository {
    async fn find_by_user_and_month(
        &self,
        user_id: i32,
        year: i32,
        month: u32,
    ) -> Result<Option<emotion_statistics::Model>, DbErr> {
        Ok(self
            .statistics
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.user_id == user_id && s.year == year && s.month == month as i32)
            .cloned())
    }
}

/// Canned generation backend that records the prompts it receives.
pub struct StubGenerator {
    reply: Mutex<Option<Result<String, GeminiError>>>,
    pub prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Mutex::new(Some(Ok(text.to_string()))),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: GeminiError) -> Self {
        Self {
            reply: Mutex::new(Some(Err(error))),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGeneration for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(GeminiError::MissingCandidates))
    }
}

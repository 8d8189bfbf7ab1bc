use crate::entities::{Diary, User};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

pub async fn init_metrics(db: &DatabaseConnection) {
    let user_count = User::find().count(db).await.unwrap_or(0);
    metrics::gauge!("diary_users_total").set(user_count as f64);

    let diary_count = Diary::find().count(db).await.unwrap_or(0);
    metrics::gauge!("diary_entries_total").set(diary_count as f64);

    tracing::info!(
        "Initialized metrics: Users={}, Diaries={}",
        user_count, diary_count
    );
}

pub fn increment_ai_requests(kind: &'static str) {
    metrics::counter!("diary_ai_requests_total", "kind" => kind).increment(1);
}

pub fn increment_ai_failures(kind: &'static str, reason: &'static str) {
    metrics::counter!("diary_ai_failures_total", "kind" => kind, "reason" => reason).increment(1);
}

pub fn increment_today_comments_created() {
    metrics::counter!("diary_today_comments_created_total").increment(1);
}

pub fn increment_main_page_requests() {
    metrics::counter!("diary_main_page_requests_total").increment(1);
}

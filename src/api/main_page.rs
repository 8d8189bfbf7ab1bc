use crate::error::AppResult;
use crate::services::{MainPageResponse, MainPageService};
use axum::extract::{Extension, Json};
use std::sync::Arc;

pub async fn get_main_page(
    Extension(service): Extension<Arc<MainPageService>>,
    Extension(user_id): Extension<i32>,
) -> AppResult<Json<MainPageResponse>> {
    let response = service.get_main_page(user_id).await?;

    tracing::Span::current()
        .record("table", "today_comments")
        .record("action", "get_main_page")
        .record("business_event", "Main page assembled");

    Ok(Json(response))
}

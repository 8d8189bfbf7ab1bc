use crate::ai::{AdviceGenerator, EmotionClassifier};
use crate::emotion::Emotion;
use crate::error::AppResult;
use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct EmotionAnalysisRequest {
    diary_content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmotionAnalysisResponse {
    pub emotions: Vec<Emotion>,
}

pub async fn analyze_emotions(
    Extension(classifier): Extension<Arc<EmotionClassifier>>,
    Json(payload): Json<EmotionAnalysisRequest>,
) -> AppResult<Json<EmotionAnalysisResponse>> {
    let emotions = classifier.classify(&payload.diary_content).await?;

    tracing::Span::current()
        .record("action", "analyze_emotions")
        .record("business_event", "Diary emotions classified");

    Ok(Json(EmotionAnalysisResponse { emotions }))
}

#[derive(Deserialize)]
pub struct AdviceRequest {
    diary_content: String,
    emotion: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub comment: String,
}

pub async fn generate_advice(
    Extension(advice): Extension<Arc<AdviceGenerator>>,
    Json(payload): Json<AdviceRequest>,
) -> AppResult<Json<AdviceResponse>> {
    let comment = advice.advise(&payload.diary_content, &payload.emotion).await?;

    tracing::Span::current()
        .record("action", "generate_advice")
        .record("business_event", "Diary advice generated");

    Ok(Json(AdviceResponse { comment }))
}

use crate::gemini::GeminiError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Emotion analysis failed: unexpected token {token:?}")]
    AnalysisFailed { token: String },

    #[error("Unknown emotion: {0}")]
    InvalidEmotion(String),

    #[error("User not found: {0}")]
    UserNotFound(i32),

    #[error("Today's comment for {0} not found")]
    TodayCommentNotFound(NaiveDate),

    #[error(transparent)]
    Gemini(#[from] GeminiError),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::AnalysisFailed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidEmotion(_) => StatusCode::BAD_REQUEST,
            AppError::UserNotFound(_) | AppError::TodayCommentNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Gemini(_) => StatusCode::BAD_GATEWAY,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Gemini(e) => {
                tracing::error!(error = %e, kind = e.kind(), "Gemini call failed");
                "AI service unavailable".to_string()
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                "Internal server error".to_string()
            }
            other => {
                tracing::warn!(error = %other, "request failed");
                other.to_string()
            }
        };

        tracing::Span::current().record("error", tracing::field::display(&self));

        let body = json!({
            "error": {
                "message": message,
                "code": status.as_u16(),
            }
        });

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

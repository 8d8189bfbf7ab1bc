pub mod diary;
pub mod main_page;
pub mod middleware;

use crate::ai::{AdviceGenerator, EmotionClassifier};
use crate::services::MainPageService;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

/// Handles shared by every request.
#[derive(Clone)]
pub struct Services {
    pub main_page: Arc<MainPageService>,
    pub classifier: Arc<EmotionClassifier>,
    pub advice: Arc<AdviceGenerator>,
}

async fn health_check() -> &'static str {
    "OK"
}

/// Application routes without the server's transport layers (tracing, CORS,
/// metrics).
pub fn router(services: Services) -> Router {
    let protected_routes = Router::new()
        .route("/main", get(main_page::get_main_page))
        .route("/diaries/emotions", post(diary::analyze_emotions))
        .route("/diaries/advice", post(diary::generate_advice))
        .route_layer(axum::middleware::from_fn(middleware::auth_middleware));

    Router::new()
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(Extension(services.main_page))
        .layer(Extension(services.classifier))
        .layer(Extension(services.advice))
        .layer(tower_cookies::CookieManagerLayer::new())
}

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tower_cookies::Cookies;

/// Cookie holding the authenticated user's id, set by the login service.
pub const USER_COOKIE: &str = "diary_user";

/// Resolves the caller from [`USER_COOKIE`] and exposes the id as an
/// `Extension<i32>`; anything missing or non-numeric is a 401.
pub async fn auth_middleware(cookies: Cookies, mut request: Request, next: Next) -> Response {
    let user_id = cookies
        .get(USER_COOKIE)
        .and_then(|cookie| cookie.value().parse::<i32>().ok());

    let Some(user_id) = user_id else {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "Unauthorized"}))).into_response();
    };

    tracing::Span::current().record("user_id", user_id);
    request.extensions_mut().insert(user_id);
    next.run(request).await
}

use axum::{routing::get, Json, Router};
use quill_core::AppState;
use serde_json::{json, Value};

pub mod error;
pub mod routes;

pub fn build_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/posts", get(routes::posts::list_posts))
        .route("/api/v1/posts/{post_id}", get(routes::posts::get_post))
        .route(
            "/api/v1/categories",
            get(routes::categories::list_categories),
        )
        .route(
            "/api/v1/categories/{category_id}/posts",
            get(routes::categories::posts_by_category),
        )
        .route(
            "/api/v1/archive/{year}/{month}/posts",
            get(routes::posts::posts_by_month),
        )
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

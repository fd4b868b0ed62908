use axum::{
    extract::{Path, Query, State},
    Json,
};
use quill_core::AppState;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::routes::posts::{listing_context, ListQuery};

pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let categories = quill_db::categories::list_category_counts(&state.db).await?;
    Ok(Json(json!({
        "categories": categories
            .iter()
            .map(|c| json!({ "id": c.id, "name": c.name, "post_count": c.post_count }))
            .collect::<Vec<_>>(),
    })))
}

pub async fn posts_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>, ApiError> {
    let category = quill_db::categories::get_category(&state.db, category_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let posts = quill_db::posts::list_posts_by_category(&state.db, category.id).await?;
    let mut context = listing_context(&state, posts, &query).await?;
    context["category"] = json!({ "id": category.id, "name": category.name });
    Ok(Json(context))
}

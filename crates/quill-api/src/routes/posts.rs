use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use quill_core::{read_tracking, AppState};
use quill_db::posts::PostRow;
use quill_util::{archive, pagination};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Raw page parameter. Malformed values fall back to page 1 instead of
    /// failing the request.
    pub page: Option<String>,
}

pub(crate) fn post_json(post: &PostRow) -> Value {
    json!({
        "id": post.id,
        "title": post.title,
        "body": post.body,
        "category_id": post.category_id,
        "read_count": post.read_count,
        "created_at": post.created_at.to_rfc3339(),
    })
}

/// Context bag shared by every listing view: one page of posts, the
/// compressed page range, category counts, and the monthly archive computed
/// from the same snapshot the listing paginates.
pub(crate) async fn listing_context(
    state: &AppState,
    posts: Vec<PostRow>,
    query: &ListQuery,
) -> Result<Value, ApiError> {
    let requested = pagination::parse_page(query.page.as_deref());
    let archive = archive::monthly_counts(&posts, |post| post.created_at);
    let page = pagination::paginate(posts, state.config.page_size, requested);
    let page_range = pagination::page_range(page.current_page, page.total_pages);
    let categories = quill_db::categories::list_category_counts(&state.db).await?;

    Ok(json!({
        "posts": page.items.iter().map(post_json).collect::<Vec<_>>(),
        "page": {
            "current_page": page.current_page,
            "total_pages": page.total_pages,
        },
        "page_range": page_range,
        "categories": categories
            .iter()
            .map(|c| json!({ "id": c.id, "name": c.name, "post_count": c.post_count }))
            .collect::<Vec<_>>(),
        "archive": archive,
    }))
}

pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>, ApiError> {
    let posts = quill_db::posts::list_posts(&state.db).await?;
    let context = listing_context(&state, posts, &query).await?;
    Ok(Json(context))
}

pub async fn posts_by_month(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>, ApiError> {
    if !(1..=12).contains(&month) {
        return Err(ApiError::NotFound);
    }
    let posts = quill_db::posts::list_posts_by_month(&state.db, year, month).await?;
    let mut context = listing_context(&state, posts, &query).await?;
    context["month"] = json!({ "year": year, "month": month });
    Ok(Json(context))
}

pub async fn get_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(post_id): Path<i64>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    let mut post = quill_db::posts::get_post(&state.db, post_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    // Neighbors by creation time over the full ordered snapshot, ties broken
    // by id so the ordering is total.
    let all = quill_db::posts::list_posts(&state.db).await?;
    let neighbors = archive::adjacent_by(&all, &(post.created_at, post.id), |p| {
        (p.created_at, p.id)
    });
    let previous = neighbors.previous.map(post_json);
    let next = neighbors.next.map(post_json);

    // First qualifying view per client: no marker cookie yet.
    let key = read_tracking::read_cookie_key(post.id);
    let jar = if jar.get(&key).is_none() {
        quill_db::posts::increment_read_count(&state.db, post.id).await?;
        post.read_count += 1;
        jar.add(Cookie::build((key, "true")).path("/"))
    } else {
        jar
    };

    Ok((
        jar,
        Json(json!({
            "post": post_json(&post),
            "previous_post": previous,
            "next_post": next,
        })),
    ))
}

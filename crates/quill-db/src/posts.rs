use crate::{datetime_from_db_text, datetime_to_db_text, DbError, DbPool};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::Row;

const POST_COLUMNS: &str = "id, title, body, category_id, read_count, created_at";

#[derive(Debug, Clone)]
pub struct PostRow {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub category_id: i64,
    pub read_count: i64,
    pub created_at: DateTime<Utc>,
}

impl<'r> sqlx::FromRow<'r, sqlx::any::AnyRow> for PostRow {
    fn from_row(row: &'r sqlx::any::AnyRow) -> Result<Self, sqlx::Error> {
        let created_at_raw: String = row.try_get("created_at")?;
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            body: row.try_get("body")?,
            category_id: row.try_get("category_id")?,
            read_count: row.try_get("read_count")?,
            created_at: datetime_from_db_text(&created_at_raw)?,
        })
    }
}

pub async fn create_post(
    pool: &DbPool,
    title: &str,
    body: &str,
    category_id: i64,
    created_at: DateTime<Utc>,
) -> Result<PostRow, DbError> {
    let row = sqlx::query_as::<_, PostRow>(&format!(
        "INSERT INTO posts (title, body, category_id, created_at)
         VALUES ($1, $2, $3, $4)
         RETURNING {POST_COLUMNS}"
    ))
    .bind(title)
    .bind(body)
    .bind(category_id)
    .bind(datetime_to_db_text(created_at))
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn get_post(pool: &DbPool, id: i64) -> Result<Option<PostRow>, DbError> {
    let row = sqlx::query_as::<_, PostRow>(&format!(
        "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// All posts, newest first. Listing pagination slices this snapshot.
pub async fn list_posts(pool: &DbPool) -> Result<Vec<PostRow>, DbError> {
    let rows = sqlx::query_as::<_, PostRow>(&format!(
        "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC, id DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn list_posts_by_category(
    pool: &DbPool,
    category_id: i64,
) -> Result<Vec<PostRow>, DbError> {
    let rows = sqlx::query_as::<_, PostRow>(&format!(
        "SELECT {POST_COLUMNS} FROM posts
         WHERE category_id = $1
         ORDER BY created_at DESC, id DESC"
    ))
    .bind(category_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Posts created within one calendar month, newest first.
///
/// The stored `created_at` text format sorts lexicographically, so the month
/// is a half-open range scan between its first day and the next month's.
pub async fn list_posts_by_month(
    pool: &DbPool,
    year: i32,
    month: u32,
) -> Result<Vec<PostRow>, DbError> {
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or(DbError::NotFound)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(DbError::NotFound)?;

    let rows = sqlx::query_as::<_, PostRow>(&format!(
        "SELECT {POST_COLUMNS} FROM posts
         WHERE created_at >= $1 AND created_at < $2
         ORDER BY created_at DESC, id DESC"
    ))
    .bind(format!("{} 00:00:00", start.format("%Y-%m-%d")))
    .bind(format!("{} 00:00:00", end.format("%Y-%m-%d")))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Bump the read counter for one post. Missing post maps to `NotFound`.
pub async fn increment_read_count(pool: &DbPool, id: i64) -> Result<(), DbError> {
    let result = sqlx::query("UPDATE posts SET read_count = read_count + 1 WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }
    Ok(())
}

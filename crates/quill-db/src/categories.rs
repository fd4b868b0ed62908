use crate::{DbError, DbPool};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
}

/// Category annotated with how many posts are filed under it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryCountRow {
    pub id: i64,
    pub name: String,
    pub post_count: i64,
}

pub async fn create_category(pool: &DbPool, name: &str) -> Result<CategoryRow, DbError> {
    let row = sqlx::query_as::<_, CategoryRow>(
        "INSERT INTO categories (name) VALUES ($1) RETURNING id, name",
    )
    .bind(name)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn get_category(pool: &DbPool, id: i64) -> Result<Option<CategoryRow>, DbError> {
    let row = sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM categories WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// All categories with their post counts, for the sidebar listing.
pub async fn list_category_counts(pool: &DbPool) -> Result<Vec<CategoryCountRow>, DbError> {
    let rows = sqlx::query_as::<_, CategoryCountRow>(
        "SELECT c.id, c.name, COUNT(p.id) AS post_count
         FROM categories c
         LEFT JOIN posts p ON p.category_id = c.id
         GROUP BY c.id, c.name
         ORDER BY c.name",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::{create_category, get_category, list_category_counts};
    use crate::posts::create_post;
    use crate::{create_pool, run_migrations, DatabaseEngine};
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn counts_include_empty_categories() {
        let pool = create_pool("sqlite::memory:", 1).await.expect("pool");
        run_migrations(&pool, DatabaseEngine::Sqlite)
            .await
            .expect("migrations");

        let rust = create_category(&pool, "rust").await.expect("rust");
        create_category(&pool, "empty").await.expect("empty");
        let when = Utc.with_ymd_and_hms(2024, 4, 1, 8, 0, 0).unwrap();
        create_post(&pool, "a", "b", rust.id, when).await.expect("post");
        create_post(&pool, "c", "d", rust.id, when).await.expect("post");

        let counts = list_category_counts(&pool).await.expect("counts");
        assert_eq!(counts.len(), 2);
        let by_name: std::collections::HashMap<&str, i64> = counts
            .iter()
            .map(|c| (c.name.as_str(), c.post_count))
            .collect();
        assert_eq!(by_name["rust"], 2);
        assert_eq!(by_name["empty"], 0);

        let fetched = get_category(&pool, rust.id).await.expect("get");
        assert_eq!(fetched.expect("exists").name, "rust");
        assert!(get_category(&pool, 999).await.expect("get").is_none());
    }
}

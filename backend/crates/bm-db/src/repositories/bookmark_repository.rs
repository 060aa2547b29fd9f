use crate::{DbError, Result as DbErrorResult};

use bm_core::{Bookmark, ErrorLocation};

use std::panic::Location;

use chrono::DateTime;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct BookmarkRow {
    id: String,
    title: String,
    url: String,
    user_id: String,
    created_at: i64,
}

impl TryFrom<BookmarkRow> for Bookmark {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: BookmarkRow) -> DbErrorResult<Self> {
        let created_at =
            DateTime::from_timestamp_millis(row.created_at).ok_or_else(|| DbError::InvalidRow {
                message: format!(
                    "bookmark {} has out-of-range created_at {}",
                    row.id, row.created_at
                ),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Bookmark {
            id: row.id,
            title: row.title,
            url: row.url,
            user_id: row.user_id,
            created_at,
        })
    }
}

/// Access to the `bookmarks` relation. Every read and write is scoped to
/// the owning user.
#[derive(Clone)]
pub struct BookmarkRepository {
    pool: SqlitePool,
}

impl BookmarkRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a fully-formed row. A duplicate id yields `DbError::Conflict`.
    pub async fn create(&self, bookmark: &Bookmark) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO bookmarks (id, title, url, user_id, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(&bookmark.id)
        .bind(&bookmark.title)
        .bind(&bookmark.url)
        .bind(&bookmark.user_id)
        .bind(bookmark.created_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_owned(&self, user_id: &str, id: &str) -> DbErrorResult<Option<Bookmark>> {
        let row = sqlx::query_as::<_, BookmarkRow>(
            r#"
              SELECT id, title, url, user_id, created_at
              FROM bookmarks
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Bookmark::try_from).transpose()
    }

    /// Newest first. Rows sharing a timestamp keep reverse insertion order.
    pub async fn find_by_user(&self, user_id: &str) -> DbErrorResult<Vec<Bookmark>> {
        let rows = sqlx::query_as::<_, BookmarkRow>(
            r#"
              SELECT id, title, url, user_id, created_at
              FROM bookmarks
              WHERE user_id = ?
              ORDER BY created_at DESC, rowid DESC
              "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Bookmark::try_from).collect()
    }

    /// Overwrite title and url. Returns false when no row of `user_id` has
    /// that id.
    pub async fn update(&self, bookmark: &Bookmark) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              UPDATE bookmarks
              SET title = ?, url = ?
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(&bookmark.title)
        .bind(&bookmark.url)
        .bind(&bookmark.id)
        .bind(&bookmark.user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Returns false when nothing matched.
    pub async fn delete(&self, user_id: &str, id: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Cheap round trip used by the health endpoint
    pub async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

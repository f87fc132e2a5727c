//! Repository for the `videos` table.
//!
//! Lookups, updates and deletes are keyed by the `(id, playlist_id)` pair so a
//! video is only reachable through the playlist it belongs to.

use chrono::Utc;
use playlist_core::types::DbId;

use crate::models::video::{CreateVideo, UpdateVideo, Video};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, url, playlist_id, created_at, updated_at";

/// Provides CRUD operations for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO videos (title, url, playlist_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&input.title)
            .bind(&input.url)
            .bind(input.playlist_id)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a video by its internal ID regardless of playlist.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a video by ID within a specific playlist.
    pub async fn find_in_playlist(
        pool: &DbPool,
        id: DbId,
        playlist_id: DbId,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1 AND playlist_id = $2");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(playlist_id)
            .fetch_optional(pool)
            .await
    }

    /// List all videos in a playlist, oldest first.
    pub async fn list_by_playlist(
        pool: &DbPool,
        playlist_id: DbId,
    ) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE playlist_id = $1 ORDER BY id");
        sqlx::query_as::<_, Video>(&query)
            .bind(playlist_id)
            .fetch_all(pool)
            .await
    }

    /// Update a video within a playlist. Only non-`None` fields in `input`
    /// are applied; `updated_at` is always refreshed.
    ///
    /// Returns `None` if no video with that ID belongs to the playlist.
    pub async fn update_in_playlist(
        pool: &DbPool,
        id: DbId,
        playlist_id: DbId,
        input: &UpdateVideo,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET
                title = COALESCE($3, title),
                url = COALESCE($4, url),
                updated_at = $5
             WHERE id = $1 AND playlist_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(playlist_id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Delete a video within a playlist. Returns `true` if a row was removed.
    pub async fn delete_in_playlist(
        pool: &DbPool,
        id: DbId,
        playlist_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1 AND playlist_id = $2")
            .bind(id)
            .bind(playlist_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

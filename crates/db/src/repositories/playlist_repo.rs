//! Repository for the `playlists` table.

use chrono::Utc;
use playlist_core::types::DbId;
use playlist_core::validation::DEFAULT_IMAGE_FILE;

use crate::models::playlist::{CreatePlaylist, Playlist, UpdatePlaylist};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, image_file, user_id, created_at, updated_at";

/// Provides CRUD operations for playlists.
pub struct PlaylistRepo;

impl PlaylistRepo {
    /// Insert a new playlist, returning the created row.
    ///
    /// If `image_file` is `None` in the input, defaults to `default.jpg`.
    pub async fn create(pool: &DbPool, input: &CreatePlaylist) -> Result<Playlist, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO playlists (name, image_file, user_id, created_at, updated_at)
             VALUES ($1, COALESCE($2, '{DEFAULT_IMAGE_FILE}'), $3, $4, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(&input.name)
            .bind(&input.image_file)
            .bind(input.user_id)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a playlist by its internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Playlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playlists WHERE id = $1");
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a playlist with the given ID exists.
    pub async fn exists(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM playlists WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all playlists owned by a user, oldest first.
    pub async fn list_by_user(pool: &DbPool, user_id: DbId) -> Result<Vec<Playlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playlists WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, Playlist>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a playlist. Only non-`None` fields in `input` are applied;
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdatePlaylist,
    ) -> Result<Option<Playlist>, sqlx::Error> {
        let query = format!(
            "UPDATE playlists SET
                name = COALESCE($2, name),
                image_file = COALESCE($3, image_file),
                updated_at = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.image_file)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a playlist. Its videos are removed by the
    /// `ON DELETE CASCADE` foreign key.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM playlists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

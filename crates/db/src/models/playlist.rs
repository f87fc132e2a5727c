//! Playlist entity model and DTOs.

use playlist_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A playlist row from the `playlists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Playlist {
    pub id: DbId,
    pub name: String,
    pub image_file: Option<String>,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new playlist.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylist {
    pub name: String,
    /// Defaults to `default.jpg` if omitted.
    pub image_file: Option<String>,
    pub user_id: DbId,
}

/// DTO for updating an existing playlist. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlaylist {
    pub name: Option<String>,
    pub image_file: Option<String>,
}

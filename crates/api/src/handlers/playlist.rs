//! Handlers for the `/playlist_video/playlists` and `/playlist_video/playlist/{id}`
//! resources.
//!
//! Listing and creation are scoped to the caller. Update and delete require a
//! valid access token but do not compare the caller against the owner, and
//! get-by-id is public.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use playlist_core::error::CoreError;
use playlist_core::types::DbId;
use playlist_core::validation::{MAX_PLAYLIST_IMAGE_LEN, MAX_PLAYLIST_NAME_LEN};
use playlist_db::models::playlist::{CreatePlaylist, Playlist, UpdatePlaylist};
use playlist_db::repositories::{PlaylistRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for `POST /playlist_video/playlists`. The owner is the caller.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlaylistRequest {
    #[validate(
        length(min = 1, max = MAX_PLAYLIST_NAME_LEN, message = "must be 1-80 characters"),
        custom(function = "playlist_core::validation::not_blank")
    )]
    pub name: String,
    #[validate(
        length(min = 1, max = MAX_PLAYLIST_IMAGE_LEN, message = "must be 1-50 characters"),
        custom(function = "playlist_core::validation::not_blank")
    )]
    pub image_file: Option<String>,
}

/// Request body for `PUT /playlist_video/playlist/{id}`. Omitted or `null`
/// fields keep their current value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePlaylistRequest {
    #[validate(
        length(min = 1, max = MAX_PLAYLIST_NAME_LEN, message = "must be 1-80 characters"),
        custom(function = "playlist_core::validation::not_blank")
    )]
    pub name: Option<String>,
    #[validate(
        length(min = 1, max = MAX_PLAYLIST_IMAGE_LEN, message = "must be 1-50 characters"),
        custom(function = "playlist_core::validation::not_blank")
    )]
    pub image_file: Option<String>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Playlist",
        id,
    })
}

/// GET /playlist_video/hello
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello World"))
}

/// GET /playlist_video/playlists
///
/// All playlists owned by the caller.
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Playlist>>> {
    let playlists = PlaylistRepo::list_by_user(&state.pool, user.user_id).await?;
    Ok(Json(playlists))
}

/// POST /playlist_video/playlists
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<CreatePlaylistRequest>,
) -> AppResult<(StatusCode, Json<Playlist>)> {
    input.validate()?;

    // The token may outlive the account it was issued for.
    UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let playlist = PlaylistRepo::create(
        &state.pool,
        &CreatePlaylist {
            name: input.name,
            image_file: input.image_file,
            user_id: user.user_id,
        },
    )
    .await?;

    tracing::info!(playlist_id = playlist.id, user_id = user.user_id, "Playlist created");
    Ok((StatusCode::CREATED, Json(playlist)))
}

/// GET /playlist_video/playlist/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Playlist>> {
    let playlist = PlaylistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(playlist))
}

/// PUT /playlist_video/playlist/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdatePlaylistRequest>,
) -> AppResult<Json<Playlist>> {
    input.validate()?;

    let patch = UpdatePlaylist {
        name: input.name,
        image_file: input.image_file,
    };
    let playlist = PlaylistRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(playlist_id = id, user_id = user.user_id, "Playlist updated");
    Ok(Json(playlist))
}

/// DELETE /playlist_video/playlist/{id}
///
/// Videos in the playlist are removed by cascade.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !PlaylistRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(playlist_id = id, user_id = user.user_id, "Playlist deleted");
    Ok(StatusCode::NO_CONTENT)
}

//! Handlers for videos nested under `/playlist_video/playlist/{playlist_id}`.
//!
//! None of these require authentication.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use playlist_core::error::CoreError;
use playlist_core::types::DbId;
use playlist_core::validation::{MAX_VIDEO_TITLE_LEN, MAX_VIDEO_URL_LEN};
use playlist_db::models::video::{CreateVideo, UpdateVideo, Video};
use playlist_db::repositories::{PlaylistRepo, VideoRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// Request body for `POST .../videos`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVideoRequest {
    #[validate(
        length(min = 1, max = MAX_VIDEO_TITLE_LEN, message = "must be 1-255 characters"),
        custom(function = "playlist_core::validation::not_blank")
    )]
    pub title: String,
    #[validate(
        length(min = 1, max = MAX_VIDEO_URL_LEN, message = "must be 1-255 characters"),
        custom(function = "playlist_core::validation::not_blank")
    )]
    pub url: String,
}

/// Request body for `PUT .../video/{video_id}`. Omitted or `null` fields keep
/// their current value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVideoRequest {
    #[validate(
        length(min = 1, max = MAX_VIDEO_TITLE_LEN, message = "must be 1-255 characters"),
        custom(function = "playlist_core::validation::not_blank")
    )]
    pub title: Option<String>,
    #[validate(
        length(min = 1, max = MAX_VIDEO_URL_LEN, message = "must be 1-255 characters"),
        custom(function = "playlist_core::validation::not_blank")
    )]
    pub url: Option<String>,
}

fn video_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Video", id })
}

/// 404 unless the playlist exists.
async fn ensure_playlist(state: &AppState, playlist_id: DbId) -> AppResult<()> {
    if PlaylistRepo::exists(&state.pool, playlist_id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Playlist",
            id: playlist_id,
        }))
    }
}

/// GET /playlist_video/playlist/{playlist_id}/videos
pub async fn list(
    State(state): State<AppState>,
    AppPath(playlist_id): AppPath<DbId>,
) -> AppResult<Json<Vec<Video>>> {
    ensure_playlist(&state, playlist_id).await?;
    let videos = VideoRepo::list_by_playlist(&state.pool, playlist_id).await?;
    Ok(Json(videos))
}

/// POST /playlist_video/playlist/{playlist_id}/videos
pub async fn create(
    State(state): State<AppState>,
    AppPath(playlist_id): AppPath<DbId>,
    AppJson(input): AppJson<CreateVideoRequest>,
) -> AppResult<(StatusCode, Json<Video>)> {
    input.validate()?;
    ensure_playlist(&state, playlist_id).await?;

    let video = VideoRepo::create(
        &state.pool,
        &CreateVideo {
            title: input.title,
            url: input.url,
            playlist_id: Some(playlist_id),
        },
    )
    .await?;

    tracing::info!(video_id = video.id, playlist_id, "Video created");
    Ok((StatusCode::CREATED, Json(video)))
}

/// GET /playlist_video/playlist/{playlist_id}/video/{video_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath((playlist_id, video_id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<Video>> {
    let video = VideoRepo::find_in_playlist(&state.pool, video_id, playlist_id)
        .await?
        .ok_or_else(|| video_not_found(video_id))?;
    Ok(Json(video))
}

/// PUT /playlist_video/playlist/{playlist_id}/video/{video_id}
///
/// Answers 201 rather than 200; existing clients depend on it.
pub async fn update(
    State(state): State<AppState>,
    AppPath((playlist_id, video_id)): AppPath<(DbId, DbId)>,
    AppJson(input): AppJson<UpdateVideoRequest>,
) -> AppResult<(StatusCode, Json<Video>)> {
    input.validate()?;

    let patch = UpdateVideo {
        title: input.title,
        url: input.url,
    };
    let video = VideoRepo::update_in_playlist(&state.pool, video_id, playlist_id, &patch)
        .await?
        .ok_or_else(|| video_not_found(video_id))?;

    tracing::info!(video_id, playlist_id, "Video updated");
    Ok((StatusCode::CREATED, Json(video)))
}

/// DELETE /playlist_video/playlist/{playlist_id}/video/{video_id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath((playlist_id, video_id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if !VideoRepo::delete_in_playlist(&state.pool, video_id, playlist_id).await? {
        return Err(video_not_found(video_id));
    }

    tracing::info!(video_id, playlist_id, "Video deleted");
    Ok(StatusCode::NO_CONTENT)
}

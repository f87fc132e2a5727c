pub mod auth;
pub mod health;
pub mod playlist_video;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                                      signup (public)
/// /auth/login                                       login (public)
/// /auth/refresh                                     refresh (refresh token)
/// /auth/user/{id}                                   delete user (public)
///
/// /playlist_video/hello                             smoke test
/// /playlist_video/playlists                         list, create (access token)
/// /playlist_video/playlist/{id}                     get (public), update, delete (access token)
/// /playlist_video/playlist/{playlist_id}/videos     list, create
/// /playlist_video/playlist/{playlist_id}/video/{video_id}
///                                                   get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/playlist_video", playlist_video::router())
}

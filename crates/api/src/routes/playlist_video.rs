//! Route definitions for the `/playlist_video` namespace.

use axum::routing::get;
use axum::Router;

use crate::handlers::{playlist, video};
use crate::state::AppState;

/// Routes mounted at `/playlist_video`.
///
/// ```text
/// GET                /hello                                       -> hello
/// GET, POST          /playlists                                   -> list, create
/// GET, PUT, DELETE   /playlist/{id}                               -> get_by_id, update, delete
/// GET, POST          /playlist/{playlist_id}/videos               -> video list, create
/// GET, PUT, DELETE   /playlist/{playlist_id}/video/{video_id}     -> video get, update, delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/hello", get(playlist::hello))
        .route("/playlists", get(playlist::list).post(playlist::create))
        .route(
            "/playlist/{id}",
            get(playlist::get_by_id)
                .put(playlist::update)
                .delete(playlist::delete),
        )
        .route(
            "/playlist/{playlist_id}/videos",
            get(video::list).post(video::create),
        )
        .route(
            "/playlist/{playlist_id}/video/{video_id}",
            get(video::get_by_id)
                .put(video::update)
                .delete(video::delete),
        )
}

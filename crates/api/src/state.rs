use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted and the config is
/// behind an `Arc`). The config, including the token signing secret, is never
/// mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: playlist_db::DbPool,
    /// Server configuration, read by extractors and handlers.
    pub config: Arc<ServerConfig>,
}

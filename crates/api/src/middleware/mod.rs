//! Authentication extractors.
//!
//! - [`auth::AuthUser`] -- requires a valid access token.
//! - [`auth::BearerToken`] -- raw bearer token, verified by the handler.

pub mod auth;

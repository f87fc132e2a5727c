//! JWT-based authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use playlist_core::error::CoreError;
use playlist_core::types::DbId;

use crate::auth::jwt::{verify_token, Claims, TokenType};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from an access token in the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires a logged-in
/// caller:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
}

/// Raw bearer token, not yet verified.
///
/// The refresh endpoint takes this instead of [`AuthUser`] and hands the
/// token to [`refresh_access_token`](crate::auth::jwt::refresh_access_token),
/// which checks signature, expiry, and the `refresh` type in one pass.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = verify(token, TokenType::Access, state)?;
        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}

impl<S: Send + Sync> FromRequestParts<S> for BearerToken {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        bearer_token(parts).map(|token| BearerToken(token.to_string()))
    }
}

/// Pull the token out of `Authorization: Bearer <token>`.
fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let auth_header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing Authorization header".into(),
            ))
        })?;

    auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>".into(),
        ))
    })
}

fn verify(token: &str, required: TokenType, state: &AppState) -> Result<Claims, AppError> {
    verify_token(token, required, &state.config.jwt).map_err(|e| {
        tracing::debug!(error = %e, %required, "Rejected bearer token");
        AppError::Token(e)
    })
}

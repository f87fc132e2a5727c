//! Handlers for the `/auth` resource (signup, login, refresh, user deletion).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use playlist_core::error::CoreError;
use playlist_core::types::DbId;
use playlist_core::validation::{MAX_EMAIL_LEN, MAX_PERSON_NAME_LEN};
use playlist_db::models::user::CreateUser;
use playlist_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::{generate_access_token, generate_refresh_token, refresh_access_token};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::BearerToken;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(
        length(min = 1, max = MAX_PERSON_NAME_LEN, message = "must be 1-80 characters"),
        custom(function = "playlist_core::validation::not_blank")
    )]
    pub first_name: String,
    #[validate(
        length(min = 1, max = MAX_PERSON_NAME_LEN, message = "must be 1-80 characters"),
        custom(function = "playlist_core::validation::not_blank")
    )]
    pub last_name: String,
    #[validate(
        email(message = "must be a valid email address"),
        length(max = MAX_EMAIL_LEN, message = "must be at most 320 characters")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token pair returned by a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// Fresh access token returned by `POST /auth/refresh`.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/signup
///
/// Register a new account. An already registered email is answered with
/// 200 and a message instead of an error; no row is written in that case.
pub async fn signup(
    State(state): State<AppState>,
    AppJson(input): AppJson<SignupRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    input.validate()?;

    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        tracing::info!(email = %input.email, "Signup attempted with registered email");
        return Ok((
            StatusCode::OK,
            Json(MessageResponse::new("User with this email already exists")),
        ));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            password_hash,
            image_file: None,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully")),
    ))
}

/// POST /auth/login
///
/// Authenticate with email + password. Returns an access and a refresh token.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let invalid = || {
        AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        ))
    };

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid)?;

    if !verify_password(&input.password, &user.password_hash) {
        tracing::info!(user_id = user.id, "Login rejected: wrong password");
        return Err(invalid());
    }

    let access_token = generate_access_token(user.id, &state.config.jwt)?;
    let refresh_token = generate_refresh_token(user.id, &state.config.jwt)?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
    }))
}

/// POST /auth/refresh
///
/// Exchange the refresh token in the `Authorization` header for a new access
/// token. The refresh token itself stays valid.
pub async fn refresh(
    State(state): State<AppState>,
    BearerToken(refresh_token): BearerToken,
) -> AppResult<Json<RefreshResponse>> {
    let (user_id, access_token) = refresh_access_token(&refresh_token, &state.config.jwt)
        .inspect_err(|e| tracing::debug!(error = %e, "Refresh rejected"))?;
    tracing::debug!(user_id, "Access token refreshed");
    Ok(Json(RefreshResponse { access_token }))
}

/// DELETE /auth/user/{id}
///
/// Delete a user. Their playlists and videos are removed by cascade.
pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = UserRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    tracing::info!(user_id = id, "User deleted");
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

//! Signed session tokens.
//!
//! Access and refresh tokens are both HS256-signed JWTs carrying a [`Claims`]
//! payload. They differ only in lifetime and in the `type` claim, which
//! [`verify_token`] checks so one kind cannot stand in for the other.
//! Refresh is non-rotating: minting a new access token leaves the refresh
//! token valid until it expires.

use std::fmt;

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use playlist_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Distinguishes the two token kinds via the `type` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Access => f.write_str("access"),
            TokenType::Refresh => f.write_str("refresh"),
        }
    }
}

/// JWT claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// Which kind of token this is.
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4).
    pub jti: String,
}

/// Reasons a presented token is rejected.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Bad signature, malformed token, or expired.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Valid token of the wrong kind (e.g. an access token used to refresh).
    #[error("Expected {expected} token, got {found} token")]
    WrongTokenType {
        expected: TokenType,
        found: TokenType,
    },

    /// Signing failed while issuing a token.
    #[error("Token encoding failed: {0}")]
    Encoding(#[source] jsonwebtoken::errors::Error),
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in minutes (default: 15).
    pub access_token_expiry_mins: i64,
    /// Refresh token lifetime in days (default: 30).
    pub refresh_token_expiry_days: i64,
}

/// Default access token expiry in minutes.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;
/// Default refresh token expiry in days.
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 30;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_SECRET`               | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `15`    |
    /// | `JWT_REFRESH_EXPIRY_DAYS`  | no       | `30`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");

        let refresh_token_expiry_days: i64 = std::env::var("JWT_REFRESH_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_REFRESH_EXPIRY_DAYS.to_string())
            .parse()
            .expect("JWT_REFRESH_EXPIRY_DAYS must be a valid i64");

        Self {
            secret,
            access_token_expiry_mins,
            refresh_token_expiry_days,
        }
    }

    /// Build a config with the default lifetimes around a known secret.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry_mins: DEFAULT_ACCESS_EXPIRY_MINS,
            refresh_token_expiry_days: DEFAULT_REFRESH_EXPIRY_DAYS,
        }
    }

    fn lifetime_secs(&self, token_type: TokenType) -> i64 {
        match token_type {
            TokenType::Access => self.access_token_expiry_mins * 60,
            TokenType::Refresh => self.refresh_token_expiry_days * 24 * 60 * 60,
        }
    }
}

fn issue(user_id: DbId, token_type: TokenType, config: &JwtConfig) -> Result<String, TokenError> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: user_id,
        token_type,
        exp: now + config.lifetime_secs(token_type),
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(TokenError::Encoding)
}

/// Generate a short-lived access token for the given user.
pub fn generate_access_token(user_id: DbId, config: &JwtConfig) -> Result<String, TokenError> {
    issue(user_id, TokenType::Access, config)
}

/// Generate a long-lived refresh token for the given user.
pub fn generate_refresh_token(user_id: DbId, config: &JwtConfig) -> Result<String, TokenError> {
    issue(user_id, TokenType::Refresh, config)
}

/// Validate a token and require it to be of `required` type.
///
/// Signature and expiry are checked first, so a forged or expired token is
/// always [`TokenError::InvalidToken`] even if its type claim would mismatch.
pub fn verify_token(
    token: &str,
    required: TokenType,
    config: &JwtConfig,
) -> Result<Claims, TokenError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )
    .map_err(|e| {
        tracing::debug!(error = %e, "Token rejected");
        TokenError::InvalidToken
    })?;

    let claims = token_data.claims;
    if claims.token_type != required {
        return Err(TokenError::WrongTokenType {
            expected: required,
            found: claims.token_type,
        });
    }
    Ok(claims)
}

/// Exchange a refresh token for a fresh access token for the same user.
///
/// Returns the new access token together with the user id it was minted for.
pub fn refresh_access_token(
    refresh_token: &str,
    config: &JwtConfig,
) -> Result<(DbId, String), TokenError> {
    let claims = verify_token(refresh_token, TokenType::Refresh, config)?;
    let access_token = generate_access_token(claims.sub, config)?;
    Ok((claims.sub, access_token))
}

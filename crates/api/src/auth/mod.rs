//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- signed access/refresh token issuance, verification, and refresh.

pub mod jwt;
pub mod password;

//! Dependency-free building blocks shared by the database and API crates.
//!
//! - [`types`] -- id and timestamp aliases used by every entity.
//! - [`error`] -- the domain error enum surfaced by handlers.
//! - [`validation`] -- column limits and field validators for request bodies.

pub mod error;
pub mod types;
pub mod validation;

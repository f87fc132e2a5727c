//! Shared response body types for API handlers.

use serde::Serialize;

/// Plain `{ "message": ... }` body used by endpoints that return no entity.
///
/// # Example
///
/// ```ignore
/// Ok(Json(MessageResponse::new("User deleted successfully")))
/// ```
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

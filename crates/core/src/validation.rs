//! Column limits and reusable field validators.
//!
//! The limits mirror the column widths declared in the initial migration so
//! requests are rejected with a 400 before the database sees them.

use validator::ValidationError;

/// Maximum length of a user's first or last name.
pub const MAX_PERSON_NAME_LEN: u64 = 80;
/// Maximum length of an email address.
pub const MAX_EMAIL_LEN: u64 = 320;
/// Maximum length of a playlist name.
pub const MAX_PLAYLIST_NAME_LEN: u64 = 80;
/// Maximum length of a playlist image reference.
pub const MAX_PLAYLIST_IMAGE_LEN: u64 = 50;
/// Maximum length of a video title.
pub const MAX_VIDEO_TITLE_LEN: u64 = 255;
/// Maximum length of a video URL.
pub const MAX_VIDEO_URL_LEN: u64 = 255;

/// Image reference used when a user or playlist is created without one.
pub const DEFAULT_IMAGE_FILE: &str = "default.jpg";

/// Reject strings made only of whitespace.
///
/// `length(min = 1)` lets `"   "` through; pair the two on required fields.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

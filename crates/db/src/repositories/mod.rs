//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod playlist_repo;
pub mod user_repo;
pub mod video_repo;

pub use playlist_repo::PlaylistRepo;
pub use user_repo::UserRepo;
pub use video_repo::VideoRepo;

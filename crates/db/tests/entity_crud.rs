//! Integration tests for user, playlist, and video repositories.
//!
//! Exercises the full repository layer against a real SQLite database:
//! - Create the user -> playlist -> video hierarchy
//! - Cascade delete behaviour from both users and playlists
//! - Unique email constraint
//! - Partial updates and playlist-scoped video lookups

use playlist_db::models::playlist::{CreatePlaylist, UpdatePlaylist};
use playlist_db::models::user::CreateUser;
use playlist_db::models::video::{CreateVideo, UpdateVideo};
use playlist_db::repositories::{PlaylistRepo, UserRepo, VideoRepo};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$not-a-real-hash".to_string(),
        image_file: None,
    }
}

fn new_playlist(user_id: i64, name: &str) -> CreatePlaylist {
    CreatePlaylist {
        name: name.to_string(),
        image_file: None,
        user_id,
    }
}

fn new_video(playlist_id: i64, title: &str) -> CreateVideo {
    CreateVideo {
        title: title.to_string(),
        url: format!("https://videos.example.com/{title}"),
        playlist_id: Some(playlist_id),
    }
}

// ---------------------------------------------------------------------------
// Test: Full hierarchy creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_full_hierarchy(pool: SqlitePool) {
    let user = UserRepo::create(&pool, &new_user("ada@example.com"))
        .await
        .unwrap();
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.image_file.as_deref(), Some("default.jpg"));
    assert_eq!(user.created_at, user.updated_at);

    let playlist = PlaylistRepo::create(&pool, &new_playlist(user.id, "Lectures"))
        .await
        .unwrap();
    assert_eq!(playlist.user_id, user.id);
    assert_eq!(playlist.name, "Lectures");
    assert_eq!(playlist.image_file.as_deref(), Some("default.jpg"));

    let video = VideoRepo::create(&pool, &new_video(playlist.id, "intro"))
        .await
        .unwrap();
    assert_eq!(video.playlist_id, Some(playlist.id));
    assert_eq!(video.url, "https://videos.example.com/intro");
}

// ---------------------------------------------------------------------------
// Test: Unique email
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_email_rejected(pool: SqlitePool) {
    UserRepo::create(&pool, &new_user("dup@example.com"))
        .await
        .unwrap();
    let result = UserRepo::create(&pool, &new_user("dup@example.com")).await;

    match result {
        Err(sqlx::Error::Database(db_err)) => assert!(db_err.is_unique_violation()),
        other => panic!("expected unique violation, got {other:?}"),
    }
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 1);
}

// ---------------------------------------------------------------------------
// Test: Foreign key on playlist owner
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_playlist_requires_existing_user(pool: SqlitePool) {
    let result = PlaylistRepo::create(&pool, &new_playlist(9999, "Orphan")).await;
    assert!(result.is_err(), "playlist with unknown owner should fail");
}

// ---------------------------------------------------------------------------
// Test: Cascade delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_cascade_delete_playlist_removes_videos(pool: SqlitePool) {
    let user = UserRepo::create(&pool, &new_user("cascade@example.com"))
        .await
        .unwrap();
    let playlist = PlaylistRepo::create(&pool, &new_playlist(user.id, "Doomed"))
        .await
        .unwrap();
    let first = VideoRepo::create(&pool, &new_video(playlist.id, "one"))
        .await
        .unwrap();
    let second = VideoRepo::create(&pool, &new_video(playlist.id, "two"))
        .await
        .unwrap();

    assert!(PlaylistRepo::delete(&pool, playlist.id).await.unwrap());

    assert!(PlaylistRepo::find_by_id(&pool, playlist.id)
        .await
        .unwrap()
        .is_none());
    assert!(VideoRepo::find_by_id(&pool, first.id).await.unwrap().is_none());
    assert!(VideoRepo::find_by_id(&pool, second.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_cascade_delete_user_removes_playlists_and_videos(pool: SqlitePool) {
    let user = UserRepo::create(&pool, &new_user("gone@example.com"))
        .await
        .unwrap();
    let playlist = PlaylistRepo::create(&pool, &new_playlist(user.id, "Mine"))
        .await
        .unwrap();
    let video = VideoRepo::create(&pool, &new_video(playlist.id, "clip"))
        .await
        .unwrap();

    assert!(UserRepo::delete(&pool, user.id).await.unwrap());

    assert!(UserRepo::find_by_id(&pool, user.id).await.unwrap().is_none());
    assert!(PlaylistRepo::find_by_id(&pool, playlist.id)
        .await
        .unwrap()
        .is_none());
    assert!(VideoRepo::find_by_id(&pool, video.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_missing_rows_returns_false(pool: SqlitePool) {
    assert!(!UserRepo::delete(&pool, 42).await.unwrap());
    assert!(!PlaylistRepo::delete(&pool, 42).await.unwrap());
    assert!(!VideoRepo::delete_in_playlist(&pool, 42, 42).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: Partial updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_partial_playlist_update_keeps_omitted_fields(pool: SqlitePool) {
    let user = UserRepo::create(&pool, &new_user("patch@example.com"))
        .await
        .unwrap();
    let created = PlaylistRepo::create(
        &pool,
        &CreatePlaylist {
            name: "Before".to_string(),
            image_file: Some("cover.png".to_string()),
            user_id: user.id,
        },
    )
    .await
    .unwrap();

    let renamed = PlaylistRepo::update(
        &pool,
        created.id,
        &UpdatePlaylist {
            name: Some("After".to_string()),
            image_file: None,
        },
    )
    .await
    .unwrap()
    .expect("playlist should exist");

    assert_eq!(renamed.name, "After");
    assert_eq!(renamed.image_file.as_deref(), Some("cover.png"));
    assert_eq!(renamed.created_at, created.created_at);
    assert!(renamed.updated_at >= created.updated_at);

    let missing = PlaylistRepo::update(&pool, 9999, &UpdatePlaylist::default())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_video_update_is_scoped_to_playlist(pool: SqlitePool) {
    let user = UserRepo::create(&pool, &new_user("scope@example.com"))
        .await
        .unwrap();
    let home = PlaylistRepo::create(&pool, &new_playlist(user.id, "Home"))
        .await
        .unwrap();
    let other = PlaylistRepo::create(&pool, &new_playlist(user.id, "Other"))
        .await
        .unwrap();
    let video = VideoRepo::create(&pool, &new_video(home.id, "scoped"))
        .await
        .unwrap();

    let patch = UpdateVideo {
        title: Some("renamed".to_string()),
        url: None,
    };

    let wrong_playlist = VideoRepo::update_in_playlist(&pool, video.id, other.id, &patch)
        .await
        .unwrap();
    assert!(wrong_playlist.is_none());

    let updated = VideoRepo::update_in_playlist(&pool, video.id, home.id, &patch)
        .await
        .unwrap()
        .expect("video should be found in its own playlist");
    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.url, video.url);

    assert!(VideoRepo::find_in_playlist(&pool, video.id, other.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_by_user_only_returns_owned_playlists(pool: SqlitePool) {
    let alice = UserRepo::create(&pool, &new_user("alice@example.com"))
        .await
        .unwrap();
    let bob = UserRepo::create(&pool, &new_user("bob@example.com"))
        .await
        .unwrap();
    PlaylistRepo::create(&pool, &new_playlist(alice.id, "A1"))
        .await
        .unwrap();
    PlaylistRepo::create(&pool, &new_playlist(alice.id, "A2"))
        .await
        .unwrap();
    PlaylistRepo::create(&pool, &new_playlist(bob.id, "B1"))
        .await
        .unwrap();

    let names: Vec<String> = PlaylistRepo::list_by_user(&pool, alice.id)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["A1", "A2"]);

    assert!(PlaylistRepo::exists(&pool, 1).await.unwrap());
    assert!(!PlaylistRepo::exists(&pool, 9999).await.unwrap());
}

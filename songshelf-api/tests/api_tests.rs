//! Integration tests for songshelf-api endpoints
//!
//! Tests cover:
//! - Listing, fetching, adding, and deleting songs
//! - The literal 400 bodies for bad delete ids and bad add payloads
//! - Health endpoint

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use songshelf_api::{build_router, AppState};
use songshelf_common::db::create_songs_table;
use songshelf_common::Song;
use sqlx::SqlitePool;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: in-memory database seeded with three songs
async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");
    create_songs_table(&pool).await.expect("Failed to create schema");

    for (name, singer, year) in [
        ("Song 1", "Artist 1", "2035"),
        ("Song 2", "Artist 2", "2042"),
        ("Song 3", "Artist 3", "1951"),
    ] {
        sqlx::query("INSERT INTO songs (song_name, singer_name, release_year) VALUES (?, ?, ?)")
            .bind(name)
            .bind(singer)
            .bind(year)
            .execute(&pool)
            .await
            .expect("Failed to seed song");
    }

    pool
}

async fn setup_app() -> axum::Router {
    let db = setup_test_db().await;
    build_router(AppState::new(db))
}

/// Test helper: create request with no body
fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: create request with a JSON body
fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: extract body bytes from response
async fn extract_bytes(body: Body) -> Vec<u8> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body")
        .to_vec()
}

/// Test helper: extract JSON body from response
async fn extract_json(body: Body) -> Value {
    serde_json::from_slice(&extract_bytes(body).await).expect("Should parse JSON")
}

// =============================================================================
// Health Endpoint
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app().await;

    let response = app.oneshot(test_request("GET", "/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "songshelf-api");
    assert!(body["version"].is_string());
}

// =============================================================================
// GET /Song
// =============================================================================

#[tokio::test]
async fn test_list_songs_returns_all_seeded_songs() {
    let app = setup_app().await;

    let response = app.oneshot(test_request("GET", "/Song")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let songs: Vec<Song> =
        serde_json::from_slice(&extract_bytes(response.into_body()).await).unwrap();
    assert_eq!(songs.len(), 3);
    assert_eq!(songs[0].song_name, "Song 1");
    assert_eq!(songs[2].release_year, "1951");
}

#[tokio::test]
async fn test_list_songs_wire_shape() {
    let app = setup_app().await;

    let response = app.oneshot(test_request("GET", "/Song")).await.unwrap();
    let body = extract_json(response.into_body()).await;

    // Field names are part of the wire contract shared with the web tier
    let first = &body.as_array().unwrap()[0];
    assert_eq!(first["SongID"], 1);
    assert_eq!(first["SongName"], "Song 1");
    assert_eq!(first["SingerName"], "Artist 1");
    assert_eq!(first["ReleaseYear"], "2035");
}

// =============================================================================
// GET /Song/:id
// =============================================================================

#[tokio::test]
async fn test_get_song_existing_id_returns_song() {
    let app = setup_app().await;

    let response = app.oneshot(test_request("GET", "/Song/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let song: Song = serde_json::from_slice(&extract_bytes(response.into_body()).await).unwrap();
    assert_eq!(song.song_id, 1);
    assert_eq!(song.song_name, "Song 1");
    assert_eq!(song.singer_name, "Artist 1");
}

#[tokio::test]
async fn test_get_song_non_existing_id_returns_not_found() {
    let app = setup_app().await;

    let response = app.oneshot(test_request("GET", "/Song/99")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// POST /Song
// =============================================================================

#[tokio::test]
async fn test_add_song_valid_data_returns_ok() {
    let app = setup_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/Song",
            json!({
                "SongName": "New Song",
                "SingerName": "New Artist",
                "ReleaseYear": "2030"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    // The new song is visible in the list with a store-assigned id
    let response = app.oneshot(test_request("GET", "/Song")).await.unwrap();
    let songs: Vec<Song> =
        serde_json::from_slice(&extract_bytes(response.into_body()).await).unwrap();
    assert_eq!(songs.len(), 4);
    assert_eq!(songs[3].song_id, 4);
    assert_eq!(songs[3].song_name, "New Song");
}

#[tokio::test]
async fn test_add_song_missing_body_returns_bad_request() {
    let app = setup_app().await;

    let response = app.oneshot(test_request("POST", "/Song")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_bytes(response.into_body()).await;
    assert_eq!(String::from_utf8(body).unwrap(), "Invalid Song data");
}

#[tokio::test]
async fn test_add_song_unparseable_body_returns_bad_request() {
    let app = setup_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/Song")
        .header("content-type", "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_bytes(response.into_body()).await;
    assert_eq!(String::from_utf8(body).unwrap(), "Invalid Song data");
}

// =============================================================================
// DELETE /Song/:id
// =============================================================================

#[tokio::test]
async fn test_delete_song_valid_id_returns_no_content() {
    let app = setup_app().await;

    let response = app
        .clone()
        .oneshot(test_request("DELETE", "/Song/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The song is gone
    let response = app.oneshot(test_request("GET", "/Song/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_song_id_zero_returns_bad_request() {
    let app = setup_app().await;

    let response = app.oneshot(test_request("DELETE", "/Song/0")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_bytes(response.into_body()).await;
    assert_eq!(String::from_utf8(body).unwrap(), "Not a valid song id");
}

#[tokio::test]
async fn test_delete_song_negative_id_returns_bad_request() {
    let app = setup_app().await;

    let response = app
        .oneshot(test_request("DELETE", "/Song/-5"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_bytes(response.into_body()).await;
    assert_eq!(String::from_utf8(body).unwrap(), "Not a valid song id");
}

#[tokio::test]
async fn test_delete_song_absent_positive_id_is_idempotent() {
    let app = setup_app().await;

    // No song 99 exists; delete still reports success
    let response = app
        .oneshot(test_request("DELETE", "/Song/99"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

//! songshelf-api library - Song catalog API service
//!
//! Exposes the Song resource over HTTP, backed by SQLite. Every operation
//! is a direct pass-through from an HTTP verb to a database call.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/Song", get(api::list_songs).post(api::add_song))
        .route("/Song/:id", get(api::get_song).delete(api::delete_song))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

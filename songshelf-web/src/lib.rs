//! songshelf-web library - HTML front-end for the Song catalog
//!
//! Renders the catalog pages (Index, Search, AddSong, Delete, Error) and
//! delegates every data operation to `SongClient`, which calls the
//! songshelf-api process over HTTP.

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod client;
pub mod pages;

pub use client::SongClient;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// HTTP client service for the downstream catalog API
    pub songs: SongClient,
}

impl AppState {
    /// Create new application state
    pub fn new(songs: SongClient) -> Self {
        Self { songs }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(pages::index))
        .route("/search", get(pages::search))
        .route("/add-song", get(pages::add_song_form).post(pages::add_song_submit))
        .route("/delete", get(pages::delete))
        .merge(pages::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

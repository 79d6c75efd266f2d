//! Index page handler - full catalog listing

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use super::layout::{render_error_page, render_page, render_song_table};
use crate::AppState;

/// GET /
///
/// Lists every song in the catalog. An unreachable API renders as an empty
/// catalog; a malformed API response renders the Error view.
pub async fn index(State(state): State<AppState>) -> Response {
    let songs = match state.songs.get_all_songs().await {
        Ok(songs) => songs,
        Err(e) => {
            warn!("Failed to load song list: {}", e);
            return render_error_page().into_response();
        }
    };

    let body = if songs.is_empty() {
        r#"<h2>Songs</h2>
<p class="empty">No songs in the catalog yet.</p>"#
            .to_string()
    } else {
        format!("<h2>Songs</h2>\n{}", render_song_table(&songs, true))
    };

    render_page("Index", &body).into_response()
}

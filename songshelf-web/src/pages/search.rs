//! Search page handler - lookup by song id

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::warn;

use super::layout::{render_error_page, render_page, render_song_table};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub id: Option<i64>,
}

/// GET /search?id=
///
/// Looks up a single song by id. A missing id binds to 0, which never
/// matches, so the page renders its empty state.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let id = params.id.unwrap_or(0);

    let result = match state.songs.get_song_by_id(id).await {
        Ok(result) => result,
        Err(e) => {
            warn!("Search for song {} failed: {}", id, e);
            return render_error_page().into_response();
        }
    };

    let form = format!(
        r#"<h2>Search</h2>
<form method="get" action="/search">
    <label for="id">Song ID</label>
    <input type="number" id="id" name="id" value="{id}">
    <button class="button" type="submit">Search</button>
</form>"#,
    );

    let results = match result {
        Some(song) => render_song_table(&[song], false),
        None => r#"<p class="empty">No matching song found.</p>"#.to_string(),
    };

    render_page("Search", &format!("{form}\n{results}")).into_response()
}

//! Delete handler - removes a song and returns to the Index

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use tracing::warn;

use super::layout::render_error_page;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: Option<i64>,
}

/// GET /delete?id=
///
/// A missing id binds to 0, which the API rejects, so the Error view
/// renders.
pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Response {
    let id = params.id.unwrap_or(0);

    if state.songs.delete_song(id).await {
        Redirect::to("/").into_response()
    } else {
        warn!("Failed to delete song {}", id);
        render_error_page().into_response()
    }
}

//! Song resource handlers
//!
//! Direct CRUD mapping: each handler is a pass-through to one call in
//! `crate::db::songs`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use songshelf_common::Song;

use crate::{db, AppState};

/// GET /Song
///
/// Returns every song in the catalog.
pub async fn list_songs(State(state): State<AppState>) -> Result<Json<Vec<Song>>, SongApiError> {
    let songs = db::songs::list_songs(&state.db).await?;
    Ok(Json(songs))
}

/// GET /Song/:id
///
/// Returns the song with the given id, or 404.
pub async fn get_song(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Song>, SongApiError> {
    match db::songs::get_song(&state.db, id).await? {
        Some(song) => Ok(Json(song)),
        None => Err(SongApiError::NotFound),
    }
}

/// POST /Song
///
/// Inserts a song; the store assigns the id (any id in the payload is
/// ignored). A missing or unparseable body is rejected with 400.
pub async fn add_song(
    State(state): State<AppState>,
    payload: Option<Json<Song>>,
) -> Result<StatusCode, SongApiError> {
    let Some(Json(song)) = payload else {
        return Err(SongApiError::InvalidPayload);
    };

    db::songs::insert_song(&state.db, &song).await?;
    Ok(StatusCode::OK)
}

/// DELETE /Song/:id
///
/// Deletes by id. Ids below 1 are rejected; deleting an id that is already
/// absent still reports success (delete is idempotent).
pub async fn delete_song(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, SongApiError> {
    if id <= 0 {
        return Err(SongApiError::InvalidSongId);
    }

    db::songs::delete_song(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Song API errors
#[derive(Debug)]
pub enum SongApiError {
    /// Missing or unparseable song payload
    InvalidPayload,
    /// Delete requested with id <= 0
    InvalidSongId,
    /// No song with the requested id
    NotFound,
    /// Underlying database failure
    DatabaseError(String),
}

impl From<songshelf_common::Error> for SongApiError {
    fn from(err: songshelf_common::Error) -> Self {
        SongApiError::DatabaseError(err.to_string())
    }
}

impl IntoResponse for SongApiError {
    fn into_response(self) -> Response {
        match self {
            // Literal bodies are part of the wire contract
            SongApiError::InvalidPayload => {
                (StatusCode::BAD_REQUEST, "Invalid Song data").into_response()
            }
            SongApiError::InvalidSongId => {
                (StatusCode::BAD_REQUEST, "Not a valid song id").into_response()
            }
            SongApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            SongApiError::DatabaseError(msg) => {
                let body = Json(json!({
                    "error": msg,
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

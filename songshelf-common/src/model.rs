//! Shared domain model

use serde::{Deserialize, Serialize};

/// A song in the catalog.
///
/// The JSON field names match the catalog API's wire format, which both
/// processes share. `song_id` is assigned by the store on insert; clients
/// may omit it (it defaults to 0) and it is ignored when adding.
///
/// `release_year` is free text and intentionally not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Song {
    #[serde(rename = "SongID", default)]
    pub song_id: i64,

    #[serde(rename = "SongName")]
    pub song_name: String,

    #[serde(rename = "SingerName")]
    pub singer_name: String,

    #[serde(rename = "ReleaseYear")]
    pub release_year: String,
}

impl Song {
    /// Create a song that has not been stored yet (id 0 until assigned)
    pub fn new(
        song_name: impl Into<String>,
        singer_name: impl Into<String>,
        release_year: impl Into<String>,
    ) -> Self {
        Self {
            song_id: 0,
            song_name: song_name.into(),
            singer_name: singer_name.into(),
            release_year: release_year.into(),
        }
    }
}

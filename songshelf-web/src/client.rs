//! HTTP client service for the catalog API
//!
//! Transport failures and non-success statuses are collapsed into neutral
//! values (empty list, None, false) so page handlers render fallbacks
//! instead of surfacing downstream detail. Only a body that fails to
//! decode is an error the caller sees.

use songshelf_common::Song;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = "Songshelf/0.1.0";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Song client errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

/// Client for the songshelf-api Song resource
#[derive(Clone)]
pub struct SongClient {
    http: reqwest::Client,
    base_url: String,
}

impl SongClient {
    /// Create a client for the API at `base_url`.
    ///
    /// Certificate validation is unconditionally disabled for the
    /// downstream connection.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch all songs. Transport failure yields an empty list.
    pub async fn get_all_songs(&self) -> Result<Vec<Song>, ClientError> {
        let url = format!("{}/Song", self.base_url);
        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("get_all_songs transport failure: {}", e);
                return Ok(Vec::new());
            }
        };

        if !response.status().is_success() {
            debug!("get_all_songs non-success status: {}", response.status());
            return Ok(Vec::new());
        }

        response
            .json::<Vec<Song>>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Fetch one song by id. Transport failure or 404 yields None.
    pub async fn get_song_by_id(&self, id: i64) -> Result<Option<Song>, ClientError> {
        let url = format!("{}/Song/{}", self.base_url, id);
        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("get_song_by_id({}) transport failure: {}", id, e);
                return Ok(None);
            }
        };

        if !response.status().is_success() {
            return Ok(None);
        }

        response
            .json::<Song>()
            .await
            .map(Some)
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Add a song. Any failure reports false.
    pub async fn add_song(&self, song: &Song) -> bool {
        let url = format!("{}/Song", self.base_url);
        match self.http.post(&url).json(song).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("add_song transport failure: {}", e);
                false
            }
        }
    }

    /// Delete a song by id. Any failure reports false.
    pub async fn delete_song(&self, id: i64) -> bool {
        let url = format!("{}/Song/{}", self.base_url, id);
        match self.http.delete(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("delete_song({}) transport failure: {}", id, e);
                false
            }
        }
    }
}

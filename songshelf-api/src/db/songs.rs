//! Song persistence operations

use songshelf_common::{Result, Song};
use sqlx::SqlitePool;

/// Fetch all songs ordered by id
pub async fn list_songs(pool: &SqlitePool) -> Result<Vec<Song>> {
    let songs = sqlx::query_as::<_, Song>(
        "SELECT song_id, song_name, singer_name, release_year FROM songs ORDER BY song_id",
    )
    .fetch_all(pool)
    .await?;

    Ok(songs)
}

/// Fetch one song by id
pub async fn get_song(pool: &SqlitePool, id: i64) -> Result<Option<Song>> {
    let song = sqlx::query_as::<_, Song>(
        "SELECT song_id, song_name, singer_name, release_year FROM songs WHERE song_id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(song)
}

/// Insert a song; the store assigns song_id. Returns the assigned id.
pub async fn insert_song(pool: &SqlitePool, song: &Song) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO songs (song_name, singer_name, release_year) VALUES (?, ?, ?)",
    )
    .bind(&song.song_name)
    .bind(&song.singer_name)
    .bind(&song.release_year)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Delete a song by id. Returns the number of rows removed (0 or 1).
pub async fn delete_song(pool: &SqlitePool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM songs WHERE song_id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

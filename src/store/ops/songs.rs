//! Song CRUD operations

use sqlx::{Pool, Sqlite};

use super::find_artist_id_by_email;
use crate::store::{NewSong, ReleasedSongRow, Song, SongWithSinger, StoreError};

/// Get all songs, released or not
pub async fn list_songs(pool: &Pool<Sqlite>) -> Result<Vec<Song>, StoreError> {
    let songs = sqlx::query_as::<_, Song>("SELECT * FROM songs ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(songs)
}

/// Get song by id
pub async fn find_song(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Song>, StoreError> {
    let song = sqlx::query_as::<_, Song>("SELECT * FROM songs WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(song)
}

/// Insert a new song owned by the artist with the given email.
///
/// The artist is resolved first; an unknown email reports
/// [`StoreError::ArtistNotFound`] and writes nothing.
pub async fn create_song(pool: &Pool<Sqlite>, song: NewSong) -> Result<Song, StoreError> {
    let Some(singer_id) = find_artist_id_by_email(pool, &song.singer_email).await? else {
        return Err(StoreError::ArtistNotFound(song.singer_email));
    };

    let created = sqlx::query_as::<_, Song>(
        "INSERT INTO songs (title, content, released, singer_id) VALUES (?, ?, ?, ?) RETURNING *",
    )
    .bind(&song.title)
    .bind(&song.content)
    .bind(song.released)
    .bind(singer_id)
    .fetch_one(pool)
    .await?;
    Ok(created)
}

/// Mark a song as released, returns the updated row.
///
/// Releasing an already-released song is a no-op that still succeeds.
pub async fn release_song(pool: &Pool<Sqlite>, id: i64) -> Result<Song, StoreError> {
    sqlx::query_as::<_, Song>("UPDATE songs SET released = 1 WHERE id = ? RETURNING *")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::SongNotFound(id))
}

/// Delete a song, returns the removed row
pub async fn delete_song(pool: &Pool<Sqlite>, id: i64) -> Result<Song, StoreError> {
    sqlx::query_as::<_, Song>("DELETE FROM songs WHERE id = ? RETURNING *")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::SongNotFound(id))
}

/// Get every released song joined with its artist, playlist order
pub async fn list_released_with_singer(
    pool: &Pool<Sqlite>,
) -> Result<Vec<SongWithSinger>, StoreError> {
    let rows = sqlx::query_as::<_, ReleasedSongRow>(
        r#"
        SELECT s.id, s.title, s.content, s.released, s.singer_id,
               a.email AS singer_email, a.name AS singer_name
        FROM songs s
        INNER JOIN artists a ON a.id = s.singer_id
        WHERE s.released = 1
        ORDER BY s.id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(SongWithSinger::from).collect())
}

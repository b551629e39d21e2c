//! Artist CRUD operations

use sqlx::{Pool, Sqlite};

use crate::store::{Artist, NewArtist, StoreError};

/// Get all artists
pub async fn list_artists(pool: &Pool<Sqlite>) -> Result<Vec<Artist>, StoreError> {
    let artists = sqlx::query_as::<_, Artist>("SELECT * FROM artists ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(artists)
}

/// Insert a new artist, returns the created row.
///
/// A duplicate email trips the UNIQUE constraint and is reported as
/// [`StoreError::EmailTaken`] rather than a raw driver error.
pub async fn create_artist(pool: &Pool<Sqlite>, artist: NewArtist) -> Result<Artist, StoreError> {
    let created = sqlx::query_as::<_, Artist>(
        "INSERT INTO artists (email, name) VALUES (?, ?) RETURNING *",
    )
    .bind(&artist.email)
    .bind(&artist.name)
    .fetch_one(pool)
    .await;

    match created {
        Ok(row) => Ok(row),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Err(StoreError::EmailTaken(artist.email))
        }
        Err(e) => Err(e.into()),
    }
}

/// Look up an artist id by email
pub async fn find_artist_id_by_email(
    pool: &Pool<Sqlite>,
    email: &str,
) -> Result<Option<i64>, StoreError> {
    let id = sqlx::query_scalar::<_, i64>("SELECT id FROM artists WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(id)
}

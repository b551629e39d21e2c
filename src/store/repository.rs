//! Database repository - main entry point
//! Delegates to ops modules for actual operations

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use super::{models::*, ops, schema, StoreError};

/// Database connection pool wrapper
#[derive(Debug)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Connect to the database at the given URL and initialize the schema.
    ///
    /// Accepts any sqlx SQLite URL, e.g. `sqlite:songs.db?mode=rwc`.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        schema::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    /// Open a fresh private in-memory database.
    ///
    /// Each SQLite connection to `:memory:` sees its own database, so the
    /// pool is capped at a single connection that is never reaped.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        schema::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    // ============ Artist Operations ============

    pub async fn list_artists(&self) -> Result<Vec<Artist>, StoreError> {
        ops::list_artists(&self.pool).await
    }

    pub async fn create_artist(&self, artist: NewArtist) -> Result<Artist, StoreError> {
        ops::create_artist(&self.pool, artist).await
    }

    // ============ Song Operations ============

    pub async fn list_songs(&self) -> Result<Vec<Song>, StoreError> {
        ops::list_songs(&self.pool).await
    }

    pub async fn find_song(&self, id: i64) -> Result<Option<Song>, StoreError> {
        ops::find_song(&self.pool, id).await
    }

    pub async fn create_song(&self, song: NewSong) -> Result<Song, StoreError> {
        ops::create_song(&self.pool, song).await
    }

    pub async fn release_song(&self, id: i64) -> Result<Song, StoreError> {
        ops::release_song(&self.pool, id).await
    }

    pub async fn delete_song(&self, id: i64) -> Result<Song, StoreError> {
        ops::delete_song(&self.pool, id).await
    }

    pub async fn list_released_with_singer(&self) -> Result<Vec<SongWithSinger>, StoreError> {
        ops::list_released_with_singer(&self.pool).await
    }
}

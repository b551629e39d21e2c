//! Database schema migrations

use sqlx::{Pool, Sqlite};

use super::StoreError;

/// Run database migrations to create/update schema
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<(), StoreError> {
    // Artists table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Songs table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS songs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            released INTEGER NOT NULL DEFAULT 0,
            singer_id INTEGER NOT NULL,
            FOREIGN KEY (singer_id) REFERENCES artists(id)
        );

        CREATE INDEX IF NOT EXISTS idx_songs_singer ON songs(singer_id);
        CREATE INDEX IF NOT EXISTS idx_songs_released ON songs(released);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

//! Storage error type shared by every database operation

use thiserror::Error;

/// Failures surfaced by the persistence layer.
///
/// The first three variants are domain outcomes that map to client errors;
/// `Database` covers everything the driver reports (I/O, corruption, pool).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no song found with id {0}")]
    SongNotFound(i64),

    #[error("no artist found with email {0}")]
    ArtistNotFound(String),

    #[error("an artist with email {0} already exists")]
    EmailTaken(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

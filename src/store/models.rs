//! Database models for persistent storage
//! These models map directly to SQLite tables and serialize straight
//! into response payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Artist row
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Artist {
    /// Unique identifier (auto-increment)
    pub id: i64,
    /// Contact email, unique across the table
    pub email: String,
    /// Display name
    pub name: String,
}

/// Song row
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Unique identifier (auto-increment)
    pub id: i64,
    /// Song title
    pub title: String,
    /// Lyrics or body text
    pub content: String,
    /// Whether the song is published to the playlist
    pub released: bool,
    /// Owning artist id
    pub singer_id: i64,
}

/// Song joined with its artist, as served by the playlist route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongWithSinger {
    #[serde(flatten)]
    pub song: Song,
    pub singer: Artist,
}

/// Flat row shape for the playlist join query; artist columns are aliased
/// to avoid clashing with the song's own id
#[derive(Debug, Clone, FromRow)]
pub struct ReleasedSongRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub released: bool,
    pub singer_id: i64,
    pub singer_email: String,
    pub singer_name: String,
}

impl From<ReleasedSongRow> for SongWithSinger {
    fn from(row: ReleasedSongRow) -> Self {
        Self {
            song: Song {
                id: row.id,
                title: row.title,
                content: row.content,
                released: row.released,
                singer_id: row.singer_id,
            },
            singer: Artist {
                id: row.singer_id,
                email: row.singer_email,
                name: row.singer_name,
            },
        }
    }
}

// ============ Input structs for creating new records ============

/// Input for creating a new artist
#[derive(Debug, Clone)]
pub struct NewArtist {
    pub email: String,
    pub name: String,
}

/// Input for creating a new song
#[derive(Debug, Clone)]
pub struct NewSong {
    pub title: String,
    pub content: String,
    pub released: bool,
    /// Email of an existing artist the song belongs to
    pub singer_email: String,
}

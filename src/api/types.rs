//! API wire types module

use serde::{Deserialize, Serialize};

/// Uniform response wrapper; every route answers with this shape.
///
/// `payload` is always present (null on failure or empty lookups) while
/// `message` only appears when there is something to say.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub payload: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of `POST /artists`
#[derive(Debug, Deserialize)]
pub struct CreateArtistBody {
    pub email: String,
    pub name: String,
}

/// Body of `POST /songs`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSongBody {
    pub title: String,
    pub content: String,
    pub singer_email: String,
}

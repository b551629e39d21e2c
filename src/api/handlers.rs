// Route handlers module

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use super::response::{bad_request, ok, ok_with_message, store_error};
use super::types::{CreateArtistBody, CreateSongBody};
use crate::config::AppState;
use crate::store::{NewArtist, NewSong};

/// GET /artists - every artist in the catalog
pub async fn handle_artists_get(state: &AppState) -> Response<Full<Bytes>> {
    match state.db.list_artists().await {
        Ok(artists) => ok_with_message(&artists, "Operation Successful"),
        Err(e) => store_error(&e),
    }
}

/// POST /artists - register a new artist
pub async fn handle_artists_post(state: &AppState, body: &Bytes) -> Response<Full<Bytes>> {
    let input: CreateArtistBody = match serde_json::from_slice(body) {
        Ok(b) => b,
        Err(e) => return bad_request(&format!("Invalid JSON: {e}")),
    };

    let new_artist = NewArtist {
        email: input.email,
        name: input.name,
    };

    match state.db.create_artist(new_artist).await {
        Ok(artist) => ok(&artist),
        Err(e) => store_error(&e),
    }
}

/// GET /playlist - released songs with their artist embedded
pub async fn handle_playlist_get(state: &AppState) -> Response<Full<Bytes>> {
    match state.db.list_released_with_singer().await {
        Ok(playlist) => ok(&playlist),
        Err(e) => store_error(&e),
    }
}

/// GET /songs - every song, released or not
pub async fn handle_songs_get(state: &AppState) -> Response<Full<Bytes>> {
    match state.db.list_songs().await {
        Ok(songs) => ok(&songs),
        Err(e) => store_error(&e),
    }
}

/// GET /songs/:id - a single song, or a null payload when the id matches nothing
pub async fn handle_song_get(state: &AppState, id: i64) -> Response<Full<Bytes>> {
    match state.db.find_song(id).await {
        Ok(song) => ok(&song),
        Err(e) => store_error(&e),
    }
}

/// POST /songs - add an unreleased song for an existing artist
pub async fn handle_songs_post(state: &AppState, body: &Bytes) -> Response<Full<Bytes>> {
    let input: CreateSongBody = match serde_json::from_slice(body) {
        Ok(b) => b,
        Err(e) => return bad_request(&format!("Invalid JSON: {e}")),
    };

    let new_song = NewSong {
        title: input.title,
        content: input.content,
        released: false,
        singer_email: input.singer_email,
    };

    match state.db.create_song(new_song).await {
        Ok(song) => ok(&song),
        Err(e) => store_error(&e),
    }
}

/// PUT /songs/release/:id - publish a song to the playlist
pub async fn handle_song_release(state: &AppState, id: i64) -> Response<Full<Bytes>> {
    match state.db.release_song(id).await {
        Ok(song) => ok(&song),
        Err(e) => store_error(&e),
    }
}

/// DELETE /songs/:id - remove a song, echoing the removed row
pub async fn handle_song_delete(state: &AppState, id: i64) -> Response<Full<Bytes>> {
    match state.db.delete_song(id).await {
        Ok(song) => ok(&song),
        Err(e) => store_error(&e),
    }
}

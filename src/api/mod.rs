// API module entry
// Dispatches requests to handlers and shapes every reply as the
// { success, payload, message? } envelope

mod handlers;
mod response;
mod types;

use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::logger;

/// Entry point for every request.
///
/// Collects the body (bounded by `http.max_body_size`) and dispatches to
/// [`route`]. The error type is infallible: every failure has already been
/// shaped into an envelope response by the time it gets here.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        resp
    } else {
        match req.collect().await {
            Ok(collected) => route(&method, &path, &collected.to_bytes(), &state).await,
            Err(e) => response::bad_request(&format!("Failed to read request body: {e}")),
        }
    };

    if state.config.logging.access_log {
        logger::log_api_request(&method, &path, response.status());
    }

    Ok(response)
}

/// Dispatch one request to its handler.
///
/// Fixed paths are matched exactly; anything else is tried against the
/// `/songs/:id` family before falling through to the structured 404.
pub async fn route(
    method: &Method,
    path: &str,
    body: &Bytes,
    state: &AppState,
) -> Response<Full<Bytes>> {
    match (method, path) {
        (&Method::GET, "/artists") => handlers::handle_artists_get(state).await,
        (&Method::POST, "/artists") => handlers::handle_artists_post(state, body).await,
        (&Method::GET, "/playlist") => handlers::handle_playlist_get(state).await,
        (&Method::GET, "/songs") => handlers::handle_songs_get(state).await,
        (&Method::POST, "/songs") => handlers::handle_songs_post(state, body).await,
        _ => route_song_with_id(method, path, state).await,
    }
}

/// Routes carrying a trailing `:id` segment, plus the 404 fallback
async fn route_song_with_id(
    method: &Method,
    path: &str,
    state: &AppState,
) -> Response<Full<Bytes>> {
    if *method == Method::PUT {
        if let Some(id) = path.strip_prefix("/songs/release/").and_then(parse_id_segment) {
            return handlers::handle_song_release(state, id).await;
        }
    } else if *method == Method::GET {
        if let Some(id) = path.strip_prefix("/songs/").and_then(parse_id_segment) {
            return handlers::handle_song_get(state, id).await;
        }
    } else if *method == Method::DELETE {
        if let Some(id) = path.strip_prefix("/songs/").and_then(parse_id_segment) {
            return handlers::handle_song_delete(state, id).await;
        }
    }

    response::endpoint_not_found(path)
}

/// Parse an `:id` path tail: exactly one non-empty segment.
///
/// A tail that is not a number maps to -1, which no row can carry
/// (AUTOINCREMENT ids start at 1), so lookups come back empty instead of
/// rejecting the request.
fn parse_id_segment(tail: &str) -> Option<i64> {
    if tail.is_empty() || tail.contains('/') {
        return None;
    }
    Some(tail.parse().unwrap_or(-1))
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_warning(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(response::payload_too_large())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

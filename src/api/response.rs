// API response utility functions module

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::types::Envelope;
use crate::logger;
use crate::store::StoreError;

/// Build a JSON response from any serializable body
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(
                    r#"{"success":false,"payload":null,"message":"Internal server error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))));
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// 200 envelope with a payload
pub fn ok<T: Serialize>(payload: &T) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &Envelope {
            success: true,
            payload: Some(payload),
            message: None,
        },
    )
}

/// 200 envelope with a payload and a message
pub fn ok_with_message<T: Serialize>(payload: &T, message: &str) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &Envelope {
            success: true,
            payload: Some(payload),
            message: Some(message.to_string()),
        },
    )
}

/// Failure envelope: `success: false`, null payload, explanatory message
pub fn error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    json_response(
        status,
        &Envelope {
            success: false,
            payload: None::<()>,
            message: Some(message.to_string()),
        },
    )
}

/// 400 Bad Request envelope
pub fn bad_request(message: &str) -> Response<Full<Bytes>> {
    error_response(StatusCode::BAD_REQUEST, message)
}

/// 413 Payload Too Large envelope
pub fn payload_too_large() -> Response<Full<Bytes>> {
    error_response(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
}

/// 404 envelope for paths outside the routing table
pub fn endpoint_not_found(path: &str) -> Response<Full<Bytes>> {
    error_response(
        StatusCode::NOT_FOUND,
        &format!("API SAYS: Endpoint not found for path: {path}"),
    )
}

/// Map a storage failure onto the envelope contract.
///
/// Missing rows turn into 404, duplicate emails into 409; anything the
/// driver reports stays a 500 and is logged server-side.
pub fn store_error(err: &StoreError) -> Response<Full<Bytes>> {
    let status = match err {
        StoreError::SongNotFound(_) | StoreError::ArtistNotFound(_) => StatusCode::NOT_FOUND,
        StoreError::EmailTaken(_) => StatusCode::CONFLICT,
        StoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        logger::log_error(&format!("Storage failure: {err}"));
    }

    error_response(status, &err.to_string())
}

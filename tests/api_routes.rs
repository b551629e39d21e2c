use std::sync::Arc;

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, StatusCode};
use serde_json::{json, Value};

use songs_api::api;
use songs_api::config::{AppState, Config, DatabaseConfig, HttpConfig, LoggingConfig, ServerConfig};
use songs_api::store::Database;

async fn test_state() -> Arc<AppState> {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3333,
            workers: None,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        logging: LoggingConfig { access_log: false },
        http: HttpConfig {
            max_body_size: 102_400,
        },
    };

    let db = Database::open_in_memory().await.unwrap();
    Arc::new(AppState::new(config, db))
}

fn json_request(method: Method, path: &str, body: &Value) -> Request<Full<Bytes>> {
    Request::builder()
        .method(method)
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap()
}

fn empty_request(method: Method, path: &str) -> Request<Full<Bytes>> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Full::new(Bytes::new()))
        .unwrap()
}

async fn send(state: &Arc<AppState>, req: Request<Full<Bytes>>) -> (StatusCode, Value) {
    let response = api::handle_request(req, Arc::clone(state)).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

async fn create_artist(state: &Arc<AppState>, email: &str, name: &str) -> Value {
    let (status, body) = send(
        state,
        json_request(
            Method::POST,
            "/artists",
            &json!({ "email": email, "name": name }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["payload"].clone()
}

async fn create_song(state: &Arc<AppState>, title: &str, singer_email: &str) -> Value {
    let (status, body) = send(
        state,
        json_request(
            Method::POST,
            "/songs",
            &json!({ "title": title, "content": "la la la", "singerEmail": singer_email }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["payload"].clone()
}

#[tokio::test]
async fn artists_list_starts_empty_with_message() {
    let state = test_state().await;

    let (status, body) = send(&state, empty_request(Method::GET, "/artists")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["payload"], json!([]));
    assert_eq!(body["message"], json!("Operation Successful"));
}

#[tokio::test]
async fn created_artists_show_up_in_the_list() {
    let state = test_state().await;

    let created = create_artist(&state, "freddie@example.com", "Freddie").await;
    assert_eq!(created["email"], json!("freddie@example.com"));
    assert_eq!(created["name"], json!("Freddie"));
    assert!(created["id"].as_i64().unwrap() >= 1);

    let (status, body) = send(&state, empty_request(Method::GET, "/artists")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payload"].as_array().unwrap().len(), 1);
    assert_eq!(body["payload"][0]["email"], json!("freddie@example.com"));
}

#[tokio::test]
async fn duplicate_artist_email_answers_conflict_envelope() {
    let state = test_state().await;

    create_artist(&state, "freddie@example.com", "Freddie").await;

    let (status, body) = send(
        &state,
        json_request(
            Method::POST,
            "/artists",
            &json!({ "email": "freddie@example.com", "name": "Impostor" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["payload"], Value::Null);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("freddie@example.com"));
}

#[tokio::test]
async fn malformed_json_body_answers_bad_request_envelope() {
    let state = test_state().await;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/artists")
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from_static(b"{not json")))
        .unwrap();
    let (status, body) = send(&state, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["payload"], Value::Null);
}

#[tokio::test]
async fn new_songs_arrive_unreleased_with_camel_case_keys() {
    let state = test_state().await;

    let freddie = create_artist(&state, "freddie@example.com", "Freddie").await;
    let song = create_song(&state, "Bohemian", "freddie@example.com").await;

    assert_eq!(song["released"], json!(false));
    assert_eq!(song["singerId"], freddie["id"]);
    assert!(song.get("singer_id").is_none());

    let path = format!("/songs/{}", song["id"]);
    let (status, body) = send(&state, empty_request(Method::GET, &path)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payload"]["title"], json!("Bohemian"));
}

#[tokio::test]
async fn song_for_unknown_singer_answers_not_found_envelope() {
    let state = test_state().await;

    let (status, body) = send(
        &state,
        json_request(
            Method::POST,
            "/songs",
            &json!({ "title": "Orphan", "content": "x", "singerEmail": "nobody@example.com" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("nobody@example.com"));
}

#[tokio::test]
async fn released_songs_reach_the_playlist_with_their_singer() {
    let state = test_state().await;

    create_artist(&state, "freddie@example.com", "Freddie").await;
    let hit = create_song(&state, "Bohemian", "freddie@example.com").await;
    create_song(&state, "B-side", "freddie@example.com").await;

    let release_path = format!("/songs/release/{}", hit["id"]);
    let (status, body) = send(&state, empty_request(Method::PUT, &release_path)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payload"]["released"], json!(true));

    let (status, body) = send(&state, empty_request(Method::GET, "/playlist")).await;
    assert_eq!(status, StatusCode::OK);
    let playlist = body["payload"].as_array().unwrap();
    assert_eq!(playlist.len(), 1);
    assert_eq!(playlist[0]["id"], hit["id"]);
    assert_eq!(playlist[0]["singer"]["email"], json!("freddie@example.com"));

    // the plain songs listing carries no embedded singer
    let (_, body) = send(&state, empty_request(Method::GET, "/songs")).await;
    let songs = body["payload"].as_array().unwrap();
    assert_eq!(songs.len(), 2);
    assert!(songs[0].get("singer").is_none());
}

#[tokio::test]
async fn releasing_a_missing_song_answers_not_found_envelope() {
    let state = test_state().await;

    let (status, body) = send(&state, empty_request(Method::PUT, "/songs/release/424242")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["payload"], Value::Null);
}

#[tokio::test]
async fn unknown_song_lookups_answer_success_with_null_payload() {
    let state = test_state().await;

    let (status, body) = send(&state, empty_request(Method::GET, "/songs/999")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["payload"], Value::Null);

    // a non-numeric id can never match a row, same null payload
    let (status, body) = send(&state, empty_request(Method::GET, "/songs/abc")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payload"], Value::Null);
}

#[tokio::test]
async fn deleting_a_song_echoes_it_then_reports_not_found() {
    let state = test_state().await;

    create_artist(&state, "freddie@example.com", "Freddie").await;
    let song = create_song(&state, "Bohemian", "freddie@example.com").await;
    let path = format!("/songs/{}", song["id"]);

    let (status, body) = send(&state, empty_request(Method::DELETE, &path)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payload"]["id"], song["id"]);

    let (status, body) = send(&state, empty_request(Method::GET, &path)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payload"], json!(null));

    let (status, body) = send(&state, empty_request(Method::DELETE, &path)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn unknown_paths_answer_the_structured_fallback() {
    let state = test_state().await;

    let (status, body) = send(&state, empty_request(Method::GET, "/unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({
            "success": false,
            "payload": null,
            "message": "API SAYS: Endpoint not found for path: /unknown"
        })
    );

    // wrong method on a known path falls through to the same shape
    let (status, body) = send(&state, empty_request(Method::POST, "/playlist")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        json!("API SAYS: Endpoint not found for path: /playlist")
    );

    // nested tails never reach the id routes
    let (status, _) = send(&state, empty_request(Method::GET, "/songs/1/2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn oversized_bodies_are_refused_up_front() {
    let state = test_state().await;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/artists")
        .header("Content-Type", "application/json")
        .header("Content-Length", "200000")
        .body(Full::new(Bytes::from_static(b"{}")))
        .unwrap();
    let (status, body) = send(&state, req).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["payload"], Value::Null);
}

use chrono::Local;
use hyper::{Method, StatusCode};
use std::net::SocketAddr;

use crate::config::Config;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!(
        "🚀 Server started at {} on port {}!",
        Local::now().format("%d %B %Y %H:%M:%S"),
        config.server.port
    );
    println!("Listening on: http://{addr}");
    println!("Database: {}", config.database.url);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Failed to serve connection: {err:?}");
}

pub fn log_api_request(method: &Method, path: &str, status: StatusCode) {
    println!("[API] {method} {path} - {}", status.as_u16());
}

pub fn log_error(message: &str) {
    eprintln!("[Error] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[Warn] {message}");
}

pub fn log_shutdown() {
    println!("\n[Signal] Ctrl+C received, shutting down");
}

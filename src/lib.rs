//! A small JSON API over artists and their songs.
//!
//! Every route answers with the same `{ success, payload, message? }`
//! envelope; persistence failures are folded into it as typed errors
//! instead of leaking driver details to clients.

pub mod api;
pub mod config;
pub mod logger;
pub mod server;
pub mod store;

//! Persistence module
//! Uses SQLite via sqlx for storing artists and their songs

mod error;
mod models;
mod ops;
mod repository;
mod schema;

pub use error::StoreError;
pub use models::*;
pub use repository::Database;

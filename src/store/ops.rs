//! Database operations organized by entity type

mod artists;
mod songs;

pub use artists::*;
pub use songs::*;

//! GUNRANK - Rank History Logger
//!
//! Fetches gun popularity and score leaderboards from a JSON API and appends
//! timestamped rows to two append-only CSV logs.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use domain::*;
pub use application::*;
pub use infrastructure::*;

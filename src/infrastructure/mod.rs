//! Infrastructure layer providing external service integrations.
//!
//! This module contains the HTTP client for the rank API and the
//! append-only CSV history logs.

pub mod http;
pub mod persistence;

#[cfg(test)]
pub(crate) mod test_server;

pub use http::*;
pub use persistence::*;

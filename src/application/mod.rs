//! Application layer wiring configuration, fetching and persistence into
//! a single fetch-and-append run.

pub mod config;
pub mod pipeline;

pub use config::*;
pub use pipeline::*;

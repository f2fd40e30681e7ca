//! GUNRANK - Rank History Logger
//!
//! Performs one fetch-and-append cycle against the rank API and exits.
//! Scheduling repeated runs is left to cron or a similar tool.

use gunrank::{run, Config};
use tracing_subscriber::EnvFilter;

/// Entry point for a single fetch-and-append run.
///
/// Logs go to stderr and are limited to errors unless `RUST_LOG` says
/// otherwise, so a normal run prints nothing.
///
/// # Errors
///
/// Returns an error only when the API hands back a rank list entry that is
/// missing `gun_id`, `rank` or `point`. Every other failure exits cleanly.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default();
    if let Err(err) = run(&config) {
        tracing::error!(error = %err, "rank response violated item schema");
        return Err(err.into());
    }

    Ok(())
}

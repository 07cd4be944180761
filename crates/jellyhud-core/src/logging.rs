#![forbid(unsafe_code)]

//! JSON log output for native hosts.
//!
//! The filter is read from `JELLYHUD_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `info`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

pub const LOG_ENV: &str = "JELLYHUD_LOG";

/// Install a global JSON subscriber. Returns `false` if one was already set.
pub fn init_json_subscriber() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_current_span(false))
        .try_init()
        .is_ok()
}

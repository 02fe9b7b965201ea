//! Logging setup
//!
//! Structured logs go through `tracing`. Verbosity is controlled by
//! `RUST_LOG` and defaults to `info`:
//!
//! - `RUST_LOG=debug` - include store-level events and rejected requests
//! - `RUST_LOG=product_api=debug,tower_http=debug` - add per-request spans

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

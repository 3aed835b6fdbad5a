#![cfg(test)]

//! Unified test logging initialization.
//!
//! One-time guard so unit tests can call this freely; integrates with
//! cargo's output capture via `with_test_writer`.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Level precedence: `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
/// Idempotent and race-safe.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

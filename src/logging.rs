//! Logging initialisation.
//!
//! Uses `tracing-subscriber` with an `EnvFilter` read from `RUST_LOG`
//! (default `info`). Per-row decisions are logged at `debug`.
//!
//! ```no_run
//! benefit_eligibility::logging::init();
//! ```

use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber for the binary.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Installs a verbose subscriber that writes through the test harness.
///
/// Safe to call from several tests; only the first call takes effect.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

//! Diagnostic logging to stderr
//!
//! Configure via the RUST_LOG environment variable, e.g. `RUST_LOG=codewrap_core=debug`.
//! Without it the level comes from `-v` flags and defaults to `warn`.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the stderr subscriber.
pub fn init(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

//! Shared plumbing for the HiDEM tool binaries.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize stderr logging for a tool binary.
///
/// Verbosity 0 shows progress at `info` (overridable through `RUST_LOG`);
/// each repeated `-v` raises it to `debug` and then `trace`.
pub fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

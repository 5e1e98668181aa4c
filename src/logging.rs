//! Logging setup built on `tracing`. Output goes to stderr so that the report
//! on stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

/// Maps the number of `-v` flags to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_logger(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(default_directive(verbosity)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

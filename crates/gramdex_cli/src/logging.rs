//! Log output for the binary.

use std::io;

use tracing_subscriber::EnvFilter;

/// Returns the log level selected by `-v` repetitions.
#[must_use]
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a formatting subscriber that writes to stderr.
///
/// Without `-v`, `RUST_LOG` decides the filter and defaults to `warn`.
/// Any `-v` overrides `RUST_LOG`. Calling this more than once has no
/// further effect.
pub fn init_logging(verbosity: u8) {
    let filter = if verbosity > 0 {
        EnvFilter::new(level_for(verbosity))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(0)))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

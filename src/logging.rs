//! Logging setup shared by the command-line tools.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a stderr `fmt` subscriber; stdout is reserved for catalog output.
///
/// `RUST_LOG` wins when set, otherwise `debug` with `verbose` and `warn` without.
pub fn init(verbose: bool) {
    let filter: EnvFilter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

use tracing_subscriber::EnvFilter;

use super::settings::{LOG_ENV, log_directive};

/// Install the stderr subscriber for the binary.
///
/// `PROMPTGEN_LOG` takes precedence over the `-v` count.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("promptgen={}", log_directive(verbose))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

//! Logging configuration using tracing

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging subsystem
///
/// Logs go to stderr so `--dump` output on stdout stays clean.
/// Log level is controlled by the `PORTAL_LOG` environment variable.
///
/// # Examples
/// ```bash
/// PORTAL_LOG=debug wifi-portal
/// PORTAL_LOG=wifi_portal=trace wifi-portal --addr 127.0.0.1:8080
/// ```
pub fn init() {
    let env_filter = EnvFilter::try_from_env("PORTAL_LOG")
        .unwrap_or_else(|_| EnvFilter::new("wifi_portal=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_names(true),
        )
        .init();
}

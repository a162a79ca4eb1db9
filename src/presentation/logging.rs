//! Tracing setup
//!
//! Logs go to stderr so stdout carries only command output (text or JSON).
//! `RUST_LOG` wins over the configured verbosity.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Verbosity;

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(verbosity: Verbosity) -> String {
    format!("lendlib={}", verbosity.filter_directive())
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

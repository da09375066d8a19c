//! # Structured Logging Module
//!
//! Environment-aware structured logging for the monitoring engine. The engine
//! itself is a library, so initialization is opt-in and idempotent: embedding
//! applications (or tests) call [`init_logging`] once and control verbosity
//! through `RUST_LOG`.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize tracing with a console layer filtered by `RUST_LOG`.
///
/// Safe to call multiple times; only the first call installs a subscriber.
/// Defaults to `info` when `RUST_LOG` is unset.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        // Ignore the error if an outer subscriber is already installed.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
    }
}

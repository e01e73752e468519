//! Bootstrap utilities for host applications.
//!
//! Shared initialization code for binaries and test harnesses embedding
//! the composition core.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LOG_ENV_VAR;

/// Initialize tracing with the `PLATTER_LOG` environment variable.
///
/// Defaults to "info" level if `PLATTER_LOG` is not set. Does nothing if
/// a global subscriber is already installed, so test harnesses may call
/// it repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV_VAR)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

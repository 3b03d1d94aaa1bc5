//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults::DEFAULT_LOG_FILTER;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the Folio tracing/logging system.
///
/// Reads the `FOLIO_LOG` environment variable for per-module log levels.
/// Format: `FOLIO_LOG=folio_engine=debug,folio_core=warn`
///
/// Falls back to `folio=info` if `FOLIO_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        install(filter);
    });
}

/// Initialize tracing with an explicit filter string (tests, embedding hosts).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);
    INIT.call_once(|| install(filter));
}

fn install(filter: EnvFilter) {
    // A host may already own the global subscriber; keep theirs.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();
}

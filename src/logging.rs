//! Tracing setup
//!
//! Diagnostics go to stderr so command output on stdout stays clean. The
//! filter comes from `GAGYEBU_LOG` (same syntax as `RUST_LOG`).

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "GAGYEBU_LOG";

const DEFAULT_FILTER: &str = "gagyebu=warn";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber; later calls are no-ops
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // a subscriber installed by the host process wins
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

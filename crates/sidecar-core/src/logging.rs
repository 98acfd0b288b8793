//! Logging setup shared by the sidecar binaries
//!
//! Everything goes to stderr and defaults to `warn`, so a normal run adds
//! nothing to the wrapped tool's own output. `RUST_LOG` raises the level.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

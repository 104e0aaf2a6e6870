//! Installs the global `tracing` subscriber.
//!
//! Diagnostics go to stderr; the level is taken from `RUST_LOG` and defaults
//! to `info`.

use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Installs logging once. Later calls, or a subscriber already installed by
/// someone else, leave the existing one in place.
pub fn init_logging() {
    INITIALISED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init();
    });
}

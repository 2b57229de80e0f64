//! Log output.
//!
//! Logs go to stderr so `render` and `schema` output on stdout stays clean.
//! `RUST_LOG` overrides the default level.

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

static INIT: Once = Once::new();

/// Installs the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let level = if verbose { Level::DEBUG } else { Level::INFO };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("netlock={level},netlock_lib={level}")));

        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

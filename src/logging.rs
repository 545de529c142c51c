//! Logging set-up.
//!
//! Logs go to stderr, quiet by default. `RUST_LOG` takes precedence over the level passed in:
//! ```bash
//! RUST_LOG=keypad_calc=debug keypad-calc --keys "1+2=" --log-level info
//! ```
use std::io;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Default filter when neither `--log-level` nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "warn";

static INIT: Once = Once::new();

/// Installs the global subscriber with `default_filter` unless `RUST_LOG` is set.
///
/// Only the first call takes effect.
pub fn init(default_filter: &str) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(default_filter)
        };
        // a subscriber installed elsewhere (e.g. by a test harness) wins
        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(true)
            .try_init()
        {
            tracing::debug!("keeping the installed subscriber: {e}");
        }
    });
}

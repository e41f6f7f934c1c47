//! Building blocks for the end-to-end tests of the storage deployment

use tracing_subscriber::EnvFilter;


/// Installs a subscriber which writes log events into the output of the
/// test harness. The level is taken from `RUST_LOG` and defaults to `info`.
///
/// Only the first call has an effect.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

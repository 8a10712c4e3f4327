//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from `RUST_LOG`
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init() {
    if env_logger::try_init().is_err() {
        log::trace!("Logger already initialized");
    }
}

/// Initialize the logging system with an explicit filter string
///
/// The filter uses `env_logger` syntax (`"info"`, `"window_engine=debug"`, ...).
pub fn init_with_filter(filter: &str) {
    if env_logger::Builder::new()
        .parse_filters(filter)
        .try_init()
        .is_err()
    {
        log::trace!("Logger already initialized, ignoring filter '{}'", filter);
    }
}

//! Logger setup for hosts embedding the widget.

/// Installs `env_logger` as the global logger, honoring `RUST_LOG`.
///
/// Does nothing if a logger is already installed, so hosts and tests may call it
/// more than once.
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::debug!("viewangle logging initialized");
    }
}

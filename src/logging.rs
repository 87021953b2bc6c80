//! Console logging and panic reporting for the browser.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the panic hook and the console logger.
///
/// Idempotent; only the first call picks the level.
pub fn init_logging(level: log::Level) {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        console_log::init_with_level(level).ok();
        log::debug!("[TriangleRenderer] logging initialized at {}", level);
    });
}

/// Adjust verbosity after the logger is installed.
pub fn set_level(filter: log::LevelFilter) {
    log::set_max_level(filter);
}

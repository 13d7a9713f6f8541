//! Thin wrappers over browser globals.
//!
//! TRADE-OFFS
//! ==========
//! These are best-effort browser-only behaviors; SSR paths no-op so server
//! rendering stays deterministic.

/// Show a blocking `window.alert` with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                log::warn!("alert suppressed: {message}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Route `log` records to the browser console and install the panic hook.
#[cfg(feature = "hydrate")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // A second init (hot reload) is harmless.
    let _ = console_log::init_with_level(level);
}

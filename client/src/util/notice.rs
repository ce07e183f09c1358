//! Blocking user-facing notices.
//!
//! In the browser this is `window.alert`, matching the modal behaviour users
//! expect for "Enter a URL" and server error text. Outside the browser it is
//! a no-op.

/// Show `message` and block until dismissed.
pub fn show(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        log::warn!("notice: {message}");
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

//! Browser Dialogs
//!
//! Blocking alert/confirm prompts and page reload.

use leptos::logging::warn;

pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else { return };
    if window.alert_with_message(message).is_err() {
        warn!("[DIALOG] alert unavailable: {}", message);
    }
}

/// Ask the user to confirm; a blocked dialog counts as "no"
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Full page reload, discarding all client state
pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

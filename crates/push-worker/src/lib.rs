//! Push Notification Worker
//!
//! Loaded by the service worker bootstrap (`static/sw.js`), which forwards
//! every `push` event to [`handle_push`] and keeps the worker alive on the
//! returned promise.

mod payload;

pub use payload::{parse_payload, PushError, PushNotice, NOTIFICATION_ICON};

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{NotificationOptions, PushEvent, ServiceWorkerGlobalScope};

fn show_notification(notice: &PushNotice) -> Result<Promise, JsValue> {
    let scope = js_sys::global().dyn_into::<ServiceWorkerGlobalScope>()?;
    let options = NotificationOptions::new();
    options.set_body(&notice.body);
    options.set_icon(notice.icon());
    scope
        .registration()
        .show_notification_with_options(&notice.title, &options)
}

/// Display the notification carried by `event`. Bad payloads are logged and
/// resolve without showing anything.
#[wasm_bindgen]
pub fn handle_push(event: PushEvent) -> Promise {
    let text = event.data().map(|data| data.text());
    let notice = match parse_payload(text.as_deref()) {
        Ok(notice) => notice,
        Err(e) => {
            web_sys::console::error_1(&format!("[PUSH] {}", e).into());
            return Promise::resolve(&JsValue::UNDEFINED);
        }
    };

    show_notification(&notice).unwrap_or_else(|err| {
        web_sys::console::error_2(&"[PUSH] showNotification failed".into(), &err);
        Promise::resolve(&JsValue::UNDEFINED)
    })
}

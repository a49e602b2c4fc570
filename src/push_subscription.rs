//! Web Push Subscription
//!
//! Registers the service worker and hands the browser's push subscription to
//! the backend. Every failure is logged and otherwise ignored.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use leptos::logging::{log, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{PushManager, PushSubscription, PushSubscriptionOptionsInit, ServiceWorkerRegistration};

use crate::api;
use crate::config::{AppConfig, SERVICE_WORKER_PATH};

/// Decode a base64url VAPID key, tolerating padding
pub fn decode_vapid_key(key: &str) -> Option<Vec<u8>> {
    let trimmed = key.trim().trim_end_matches('=');
    URL_SAFE_NO_PAD.decode(trimmed).ok().filter(|bytes| !bytes.is_empty())
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

async fn register_worker() -> Result<ServiceWorkerRegistration, String> {
    let window = web_sys::window().ok_or("window is unavailable")?;
    let container = window.navigator().service_worker();
    let registration = JsFuture::from(container.register(SERVICE_WORKER_PATH))
        .await
        .map_err(js_error)?;
    registration
        .dyn_into::<ServiceWorkerRegistration>()
        .map_err(|_| "unexpected registration object".to_string())
}

async fn existing_subscription(manager: &PushManager) -> Result<Option<PushSubscription>, String> {
    let current = JsFuture::from(manager.get_subscription().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    if current.is_null() || current.is_undefined() {
        return Ok(None);
    }
    Ok(current.dyn_into::<PushSubscription>().ok())
}

async fn new_subscription(manager: &PushManager, key: &[u8]) -> Result<PushSubscription, String> {
    let options = PushSubscriptionOptionsInit::new();
    let server_key = js_sys::Uint8Array::from(key);
    js_sys::Reflect::set(&options, &"userVisibleOnly".into(), &JsValue::TRUE).map_err(js_error)?;
    js_sys::Reflect::set(&options, &"applicationServerKey".into(), &server_key).map_err(js_error)?;

    let subscription = JsFuture::from(manager.subscribe_with_options(&options).map_err(js_error)?)
        .await
        .map_err(js_error)?;
    subscription
        .dyn_into::<PushSubscription>()
        .map_err(|_| "unexpected subscription object".to_string())
}

async fn subscribe(config: &AppConfig) -> Result<(), String> {
    let registration = register_worker().await?;
    let manager = registration.push_manager().map_err(js_error)?;

    let subscription = match existing_subscription(&manager).await? {
        Some(existing) => existing,
        None => {
            let key = api::fetch_vapid_key(config).await.map_err(|e| e.to_string())?;
            let key = decode_vapid_key(&key).ok_or("VAPID key is not valid base64url")?;
            new_subscription(&manager, &key).await?
        }
    };

    let json = js_sys::JSON::stringify(&subscription)
        .map_err(js_error)?
        .as_string()
        .ok_or("subscription is not serializable")?;
    api::subscribe_push(config, json).await.map_err(|e| e.to_string())
}

/// Subscribe this browser to push notifications
pub async fn enable_push(config: AppConfig) {
    match subscribe(&config).await {
        Ok(()) => log!("[PUSH] subscription registered"),
        Err(e) => warn!("[PUSH] subscription skipped: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_vapid_key() {
        assert_eq!(decode_vapid_key("AQID"), Some(vec![1, 2, 3]));
        assert_eq!(decode_vapid_key("AQI="), Some(vec![1, 2]));
        assert_eq!(decode_vapid_key("-_8"), Some(vec![0xfb, 0xff]));
        assert_eq!(decode_vapid_key(""), None);
        assert_eq!(decode_vapid_key("not base64!"), None);
    }
}

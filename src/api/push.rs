//! Push Subscription Endpoints

use gloo_net::http::Request;

use super::{require_success, send_ack, send_json, ApiError};
use crate::config::AppConfig;
use crate::models::VapidKey;

pub async fn fetch_vapid_key(config: &AppConfig) -> Result<String, ApiError> {
    let key: VapidKey = send_json(Request::get(&config.url("/vapid_public_key")).build()?).await?;
    key.key
        .filter(|k| !k.is_empty())
        .ok_or(ApiError::Shape("server has no VAPID key"))
}

/// Register a serialized `PushSubscription` with the backend
pub async fn subscribe_push(config: &AppConfig, subscription_json: String) -> Result<(), ApiError> {
    let request = Request::post(&config.url("/subscribe_push"))
        .header("Content-Type", "application/json")
        .body(subscription_json)?;
    require_success(send_ack(request).await?)
}

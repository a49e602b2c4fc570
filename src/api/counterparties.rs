//! Counterparty Endpoints

use gloo_net::http::Request;
use serde_json::{Map, Value};

use super::{path_segment, require_success, send_ack, send_json, ApiError};
use crate::config::AppConfig;
use crate::models::{Counterparty, CounterpartyList};

/// POST a new counterparty, or PUT over an existing one when `id` is known
pub async fn save_counterparty(
    config: &AppConfig,
    id: Option<&str>,
    payload: &Map<String, Value>,
) -> Result<(), ApiError> {
    let request = match id {
        Some(id) => Request::put(&config.url(&format!("/api/counterparties/{}", path_segment(id)))),
        None => Request::post(&config.url("/api/counterparties")),
    }
    .json(payload)?;
    require_success(send_ack(request).await?)
}

pub async fn list_counterparties(config: &AppConfig) -> Result<Vec<Counterparty>, ApiError> {
    let list: CounterpartyList = send_json(Request::get(&config.url("/api/counterparties/")).build()?).await?;
    if !list.success {
        return Err(ApiError::Rejected(list.error));
    }
    Ok(list.counterparties)
}

pub async fn delete_counterparty(config: &AppConfig, id: &str) -> Result<(), ApiError> {
    let url = config.url(&format!("/api/counterparties/{}", path_segment(id)));
    require_success(send_ack(Request::delete(&url).build()?).await?)
}

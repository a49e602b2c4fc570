//! Service Request Endpoints
//!
//! Requests are addressed by their position in the list the backend last sent.

use gloo_net::http::Request;

use super::{require_success, send_ack, send_json, ApiError};
use crate::config::AppConfig;
use crate::models::ServiceRequest;
use crate::status::StatusAction;

const INVALID_FORMAT: &str = "Invalid data format received";

/// Extract the request list from a `/requests_data` body.
/// Anything but an array under `requests` is a shape error.
pub fn parse_request_list(body: serde_json::Value) -> Result<Vec<ServiceRequest>, ApiError> {
    let serde_json::Value::Object(mut map) = body else {
        return Err(ApiError::Shape(INVALID_FORMAT));
    };
    match map.remove("requests") {
        Some(list @ serde_json::Value::Array(_)) => {
            serde_json::from_value(list).map_err(|e| ApiError::Decode(e.to_string()))
        }
        _ => Err(ApiError::Shape(INVALID_FORMAT)),
    }
}

pub async fn fetch_requests(config: &AppConfig) -> Result<Vec<ServiceRequest>, ApiError> {
    let body: serde_json::Value = send_json(Request::get(&config.url("/requests_data")).build()?).await?;
    parse_request_list(body)
}

pub async fn update_status(config: &AppConfig, index: usize, action: StatusAction) -> Result<(), ApiError> {
    let url = config.url(&format!("/update_status/{}/{}", index, action.as_str()));
    let ack = send_ack(Request::post(&url).build()?).await?;
    require_success(ack)
}

pub async fn delete_request(config: &AppConfig, index: usize) -> Result<(), ApiError> {
    let url = config.url(&format!("/delete_request/{}", index));
    let ack = send_ack(Request::post(&url).build()?).await?;
    require_success(ack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_request_list() {
        let list = parse_request_list(json!({
            "requests": [
                {"address": "A", "issue": "x", "status": "done"},
                {"address": "B", "issue": "y"}
            ]
        }))
        .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].address, "B");
    }

    #[test]
    fn test_missing_or_wrong_requests_key() {
        for body in [json!({}), json!({"requests": null}), json!({"requests": {"a": 1}}), json!([1, 2]), json!(null)] {
            assert_eq!(parse_request_list(body), Err(ApiError::Shape(INVALID_FORMAT)));
        }
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert_eq!(parse_request_list(json!({"requests": [], "error": "x"})), Ok(vec![]));
    }
}

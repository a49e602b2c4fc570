//! Push Payload
//!
//! The backend sends `{"title": ..., "body": ...}` as the push message.

use serde::Deserialize;
use thiserror::Error;

/// Icon shown on every notification
pub const NOTIFICATION_ICON: &str = "/static/img/logo.png";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PushError {
    #[error("push event carried no data")]
    MissingData,
    #[error("push payload is not valid JSON: {0}")]
    InvalidJson(String),
}

/// Notification to display for one push message
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PushNotice {
    pub title: String,
    pub body: String,
}

impl PushNotice {
    pub fn icon(&self) -> &'static str {
        NOTIFICATION_ICON
    }
}

/// Parse the raw push message text
pub fn parse_payload(text: Option<&str>) -> Result<PushNotice, PushError> {
    let text = text.ok_or(PushError::MissingData)?;
    serde_json::from_str(text).map_err(|e| PushError::InvalidJson(e.to_string()))
}

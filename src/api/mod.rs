//! Backend API Wrappers
//!
//! Frontend bindings to the backend HTTP endpoints, organized by domain.

mod counterparties;
mod push;
mod requests;

use gloo_net::http::{Request, Response};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::Ack;

// Re-export all public items
pub use counterparties::*;
pub use push::*;
pub use requests::*;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Network unreachable, CORS, aborted request
    #[error("{0}")]
    Transport(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// Body was not the JSON we expected
    #[error("invalid response body: {0}")]
    Decode(String),
    /// JSON parsed but lacked the expected structure
    #[error("{0}")]
    Shape(&'static str),
    /// Backend answered `success: false`
    #[error("{}", .0.as_deref().unwrap_or("request rejected"))]
    Rejected(Option<String>),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

/// Encode a dynamic value for use as a single path segment
pub(crate) fn path_segment(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

/// Send a request and decode the JSON body, failing on non-2xx statuses
pub(crate) async fn send_json<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let response = request.send().await?;
    decode_json(response).await
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send a request expecting `{success, error?}`. The body is decoded even for
/// error statuses since the backend reports failures as `success: false`.
pub(crate) async fn send_ack(request: Request) -> Result<Ack, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await?;
    match serde_json::from_str::<Ack>(&text) {
        Ok(ack) => Ok(ack),
        Err(_) if !response.ok() => Err(ApiError::Status(status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Turn an acknowledgement into a result
pub(crate) fn require_success(ack: Ack) -> Result<(), ApiError> {
    if ack.success {
        Ok(())
    } else {
        Err(ApiError::Rejected(ack.error.filter(|e| !e.is_empty())))
    }
}

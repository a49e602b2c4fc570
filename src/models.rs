//! Frontend Models
//!
//! Data structures matching backend payloads.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::status::RequestStatus;

/// Accept strings, numbers and null where the backend is loose about types
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        other => other.to_string(),
    })
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = lenient_string(deserializer)?;
    Ok(if s.is_empty() { None } else { Some(s) })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        serde_json::Value::String(s) => matches!(s.as_str(), "1" | "true"),
        _ => false,
    })
}

// ========================
// Service Requests
// ========================

/// Service request as listed by `/requests_data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceRequest {
    /// Backend-assigned identifier, when the backend sends one
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: String,
    /// Entrance / lobby qualifier
    #[serde(default, deserialize_with = "lenient_string")]
    pub entrance: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub district: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub issue: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    /// Creation time as sent by the backend
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub completed: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    pub completed_time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub processed_by: String,
    /// Raw status; absent or unknown means pending
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Identity used to make sure an optimistic patch hits the clicked record.
/// The backend `id` is the row position, so it is not part of the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestKey {
    pub timestamp: String,
    pub address: String,
    pub issue: String,
}

impl ServiceRequest {
    pub fn status(&self) -> RequestStatus {
        RequestStatus::from_raw(self.status.as_deref())
    }

    pub fn key(&self) -> RequestKey {
        RequestKey {
            timestamp: self.timestamp.clone(),
            address: self.address.clone(),
            issue: self.issue.clone(),
        }
    }

    /// Address with the entrance suffix used in the table
    pub fn location(&self) -> String {
        if self.entrance.is_empty() {
            self.address.clone()
        } else {
            format!("{} п.{}", self.address, self.entrance)
        }
    }

    /// Case-insensitive match over the searchable columns
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [&self.address, &self.entrance, &self.name, &self.issue, &self.phone]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

// ========================
// Counterparties
// ========================

/// Counterparty record: flat string fields keyed by form field name
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Counterparty {
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl Counterparty {
    /// Field value as text, `""` when absent or null
    pub fn field(&self, key: &str) -> String {
        match self.fields.get(key) {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn display_name(&self) -> String {
        let name = self.field("companyName");
        if name.is_empty() {
            "—".to_string()
        } else {
            name
        }
    }
}

// ========================
// Responses
// ========================

/// `{success, error?}` acknowledgement returned by mutating endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ack {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CounterpartyList {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub counterparties: Vec<Counterparty>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VapidKey {
    pub key: Option<String>,
}

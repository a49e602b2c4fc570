//! Runtime Configuration
//!
//! Resolved once at startup from `<meta>` tags in the host page, falling back
//! to compile-time environment and then to same-origin defaults.

use std::time::Duration;

use wasm_bindgen::JsCast;

const API_META: &str = "service-desk-api";
const POLL_META: &str = "service-desk-poll-secs";

pub const DEFAULT_POLL_SECS: u64 = 30;
/// Path of the service worker script registered for push
pub const SERVICE_WORKER_PATH: &str = "/sw.js";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for every backend path, without trailing slash ("" = same origin)
    pub api_base: String,
    pub poll_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_SECS),
        }
    }
}

impl AppConfig {
    /// Build from raw meta/env values; blank or invalid values fall back
    pub fn from_parts(api_meta: Option<&str>, api_env: Option<&str>, poll_meta: Option<&str>) -> Self {
        let api_base = api_meta
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or_else(|| api_env.map(str::trim).filter(|s| !s.is_empty()))
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_string();

        let poll_secs = poll_meta
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_POLL_SECS);

        Self {
            api_base,
            poll_interval: Duration::from_secs(poll_secs),
        }
    }

    /// Read the host page
    pub fn load() -> Self {
        let api_meta = read_meta(API_META);
        let poll_meta = read_meta(POLL_META);
        Self::from_parts(api_meta.as_deref(), option_env!("SERVICE_DESK_API"), poll_meta.as_deref())
    }

    /// Absolute URL for a backend path starting with `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    Some(meta.content())
}

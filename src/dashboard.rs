//! Request Dashboard Controller
//!
//! Polling, status updates and deletion for the request table. Mutations are
//! applied optimistically once the backend acknowledges them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::logging::{error, log, warn};
use leptos::task::spawn_local;

use crate::api;
use crate::config::AppConfig;
use crate::dialog;
use crate::store::{
    store_apply_transition, store_begin_fetch, store_fetch_failed, store_remove_request,
    store_replace_requests, store_request_key, DashboardStore, ReplaceOutcome,
};
use crate::table::{TableCommand, DELETE_CONFIRM_TEXT};

/// Fetch the request list once and apply it if it is still current
pub async fn fetch_requests(store: DashboardStore, config: &AppConfig) {
    let Some(ticket) = store_begin_fetch(&store) else { return };

    match api::fetch_requests(config).await {
        Ok(requests) => {
            let count = requests.len();
            match store_replace_requests(&store, ticket, requests) {
                ReplaceOutcome::Applied => log!("[DASHBOARD] Loaded {} requests", count),
                outcome => log!("[DASHBOARD] Dropped {:?} snapshot of {} requests", outcome, count),
            }
        }
        Err(e) => {
            error!("[DASHBOARD] Error fetching requests: {}", e);
            store_fetch_failed(&store, ticket, e.to_string());
        }
    }
}

/// Handle for stopping the poll loop
pub struct Poller {
    alive: Arc<AtomicBool>,
}

impl Poller {
    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

/// Initial fetch, then one fetch per `config.poll_interval` regardless of
/// pending local mutations
pub fn start_polling(store: DashboardStore, config: AppConfig) -> Poller {
    let alive = Arc::new(AtomicBool::new(true));
    let poller = Poller { alive: alive.clone() };
    let interval_ms = u32::try_from(config.poll_interval.as_millis()).unwrap_or(u32::MAX);

    spawn_local(async move {
        fetch_requests(store, &config).await;
        loop {
            TimeoutFuture::new(interval_ms).await;
            if !alive.load(Ordering::Relaxed) {
                break;
            }
            fetch_requests(store, &config).await;
        }
    });

    poller
}

/// Execute a command decoded from a table click
pub fn run_command(store: DashboardStore, config: AppConfig, command: TableCommand) {
    match command {
        TableCommand::Transition { index, action } => {
            let Some(key) = store_request_key(&store, index) else {
                return;
            };
            spawn_local(async move {
                match api::update_status(&config, index, action).await {
                    Ok(()) => {
                        if !store_apply_transition(&store, index, &key, action) {
                            warn!("[DASHBOARD] Request #{} changed before update landed; waiting for next poll", index);
                        }
                    }
                    Err(e) => error!("[DASHBOARD] Error updating status: {}", e),
                }
            });
        }
        TableCommand::Delete { index } => {
            let Some(key) = store_request_key(&store, index) else {
                return;
            };
            if !dialog::confirm(DELETE_CONFIRM_TEXT) {
                return;
            }
            spawn_local(async move {
                match api::delete_request(&config, index).await {
                    Ok(()) => {
                        if !store_remove_request(&store, index, &key) {
                            warn!("[DASHBOARD] Request #{} changed before delete landed; waiting for next poll", index);
                        }
                    }
                    Err(e) => error!("[DASHBOARD] Error deleting request: {}", e),
                }
            });
        }
    }
}

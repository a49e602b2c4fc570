//! Service Desk Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod counterparty_form;
mod dashboard;
mod dialog;
mod format;
mod models;
mod push_subscription;
mod status;
mod store;
mod table;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

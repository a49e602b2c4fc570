//! Request Table Component
//!
//! Table of service requests. A single click listener on the body resolves the
//! row index and button class and dispatches to the dashboard controller.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::RequestRow;
use crate::context::use_app_context;
use crate::dashboard;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use crate::table::{decode_click, TableBody, TableCommand, COLUMN_COUNT, EMPTY_TEXT, NO_MATCHES_TEXT};

/// Resolve a click inside the table body into a command
fn command_from_event(ev: &web_sys::MouseEvent) -> Option<TableCommand> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let button = target.closest("button").ok().flatten();
    let row = target.closest("tr").ok().flatten();

    let row_index = row.and_then(|r| r.get_attribute("data-index"));
    let classes = button.as_ref().map(|b| b.class_name());
    let action = button.as_ref().and_then(|b| b.get_attribute("data-action"));
    decode_click(row_index.as_deref(), classes.as_deref(), action.as_deref())
}

/// Service request table
#[component]
pub fn RequestTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    let body = Memo::new(move |_| {
        let filter = store.filter().get();
        let search = store.search().get();
        let load_error = store.load_error().get();
        store.ledger().with(|ledger| {
            TableBody::build(ledger.snapshot(), load_error.as_deref(), filter, &search)
        })
    });

    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(command) = command_from_event(&ev) {
            dashboard::run_command(store, ctx.config(), command);
        }
    };

    view! {
        <table class="table table-bordered requests-table">
            <thead>
                <tr>
                    <th>"Час"</th>
                    <th>"Адреса"</th>
                    <th>"Ім'я"</th>
                    <th>"Проблема"</th>
                    <th>"Телефон"</th>
                    <th>"Виконано"</th>
                    <th>"Статус"</th>
                    <th>"Дії"</th>
                </tr>
            </thead>
            <tbody id="requestsTable" on:click=on_click>
                {move || match body.get() {
                    TableBody::Error(message) => view! {
                        <tr>
                            <td colspan=COLUMN_COUNT.to_string() class="text-center text-danger">{message}</td>
                        </tr>
                    }.into_any(),
                    TableBody::Empty => view! {
                        <tr>
                            <td colspan=COLUMN_COUNT.to_string() class="text-center text-muted">{EMPTY_TEXT}</td>
                        </tr>
                    }.into_any(),
                    TableBody::NoMatches => view! {
                        <tr>
                            <td colspan=COLUMN_COUNT.to_string() class="text-center text-muted">{NO_MATCHES_TEXT}</td>
                        </tr>
                    }.into_any(),
                    TableBody::Rows(rows) => rows
                        .into_iter()
                        .map(|row| view! { <RequestRow row=row /> })
                        .collect_view()
                        .into_any(),
                }}
            </tbody>
        </table>
    }
}

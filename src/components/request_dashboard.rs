//! Request Dashboard Component
//!
//! Owns the dashboard store and the poll loop for as long as it is mounted.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{RequestTable, RequestToolbar};
use crate::context::use_app_context;
use crate::dashboard;
use crate::push_subscription;
use crate::store::DashboardState;

#[component]
pub fn RequestDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(DashboardState::default());
    provide_context(store);

    let poller = dashboard::start_polling(store, ctx.config());
    on_cleanup(move || poller.stop());

    let enable_push = move |_| {
        let config = ctx.config();
        spawn_local(async move {
            push_subscription::enable_push(config).await;
        });
    };

    view! {
        <section class="requests-dashboard">
            <div class="section-header">
                <h2>"Заявки"</h2>
                <button type="button" class="btn btn-sm btn-outline-secondary" on:click=enable_push>
                    "🔔 Сповіщення"
                </button>
            </div>
            <RequestToolbar />
            <RequestTable />
        </section>
    }
}

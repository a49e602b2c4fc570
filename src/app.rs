//! Service Desk App
//!
//! Main application component: tab bar plus the active screen.

use leptos::prelude::*;

use crate::components::{CounterpartyPanel, RequestDashboard, ScreenTabBar};
use crate::config::AppConfig;
use crate::context::{AppContext, Screen};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    web_sys::console::log_1(&format!("[APP] API base '{}', poll every {:?}", config.api_base, config.poll_interval).into());

    let (screen, set_screen) = signal(Screen::Requests);
    let ctx = AppContext::new(config, (screen, set_screen));

    // Provide context to all children
    provide_context(ctx);

    view! {
        <div class="container-fluid app-layout">
            <ScreenTabBar />
            <main class="main-content">
                {move || match screen.get() {
                    Screen::Requests => view! { <RequestDashboard /> }.into_any(),
                    Screen::Counterparties => view! { <CounterpartyPanel /> }.into_any(),
                }}
            </main>
        </div>
    }
}

//! Screen Tab Bar Component
//!
//! Switches between the request dashboard and the counterparty screen.

use leptos::prelude::*;

use crate::context::{use_app_context, Screen};

const SCREENS: &[(Screen, &str)] = &[
    (Screen::Requests, "Заявки"),
    (Screen::Counterparties, "Контрагенти"),
];

#[component]
pub fn ScreenTabBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="nav nav-tabs screen-tab-bar">
            {SCREENS.iter().map(|&(screen, label)| {
                let is_active = move || ctx.screen.get() == screen;
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "nav-link active" } else { "nav-link" }
                        on:click=move |_| ctx.show(screen)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

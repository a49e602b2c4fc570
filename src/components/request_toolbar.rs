//! Request Toolbar Component
//!
//! Status counters, status filter and search box above the request table.

use leptos::prelude::*;

use crate::status::RequestStatus;
use crate::store::{use_dashboard_store, DashboardStateStoreFields, StatusFilter};

const FILTERS: &[(StatusFilter, &str)] = &[
    (StatusFilter::All, "Усі"),
    (StatusFilter::Only(RequestStatus::Pending), "Очікують"),
    (StatusFilter::Only(RequestStatus::Done), "Виконані"),
    (StatusFilter::Only(RequestStatus::Error), "Не працює"),
];

#[component]
pub fn RequestToolbar() -> impl IntoView {
    let store = use_dashboard_store();
    let counts = Memo::new(move |_| store.ledger().with(|ledger| ledger.counts()));

    view! {
        <div class="requests-toolbar">
            <div class="status-counters">
                <span class="badge bg-warning text-dark">"Очікує: " {move || counts.get().pending}</span>
                <span class="badge bg-success">"Виконано: " {move || counts.get().done}</span>
                <span class="badge bg-danger">"Не працює: " {move || counts.get().error}</span>
            </div>

            <div class="btn-group status-filter">
                {FILTERS.iter().map(|(filter, label)| {
                    let filter = *filter;
                    let is_selected = move || store.filter().get() == filter;
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "btn btn-sm btn-primary active" } else { "btn btn-sm btn-outline-primary" }
                            data-filter=filter.as_str()
                            on:click=move |_| store.filter().set(filter)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <input
                type="search"
                class="form-control form-control-sm requests-search"
                placeholder="Пошук за адресою, ім'ям, телефоном..."
                prop:value=move || store.search().get()
                on:input=move |ev| store.search().set(event_target_value(&ev))
            />
        </div>
    }
}

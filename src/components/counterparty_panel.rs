//! Counterparty Panel Component
//!
//! Counterparty list with create/edit through the modal form and inline
//! delete confirmation.

use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{CounterpartyModal, DeleteConfirmButton};
use crate::context::use_app_context;
use crate::counterparty_form::{
    clear_form, fill_form, read_form, save_failure_text, CREATE_TITLE, EDIT_TITLE, SAVED_TEXT,
};
use crate::dialog;
use crate::models::Counterparty;

fn page_document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

#[component]
pub fn CounterpartyPanel() -> impl IntoView {
    let ctx = use_app_context();

    let (counterparties, set_counterparties) = signal(Vec::<Counterparty>::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (modal_open, set_modal_open) = signal(false);
    let (modal_title, set_modal_title) = signal(CREATE_TITLE);
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);

    // Load list on mount and after deletions
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let config = ctx.config();
        spawn_local(async move {
            match api::list_counterparties(&config).await {
                Ok(loaded) => {
                    log!("[COUNTERPARTY] Loaded {} counterparties", loaded.len());
                    set_counterparties.set(loaded);
                }
                Err(e) => error!("[COUNTERPARTY] Error loading counterparties: {}", e),
            }
        });
    });

    let new_counterparty = move |_| {
        if let Some(document) = page_document() {
            clear_form(&document);
        }
        set_editing_id.set(None);
        set_modal_title.set(CREATE_TITLE);
        set_modal_open.set(true);
    };

    let edit_counterparty = move |index: usize| {
        let Some(record) = counterparties.with_untracked(|list| list.get(index).cloned()) else {
            warn!("[COUNTERPARTY] No counterparty at index {}", index);
            return;
        };
        if let Some(document) = page_document() {
            fill_form(&document, &record);
        }
        set_editing_id.set(record.id.clone());
        set_modal_title.set(EDIT_TITLE);
        set_modal_open.set(true);
    };

    let save_counterparty = move |_: ()| {
        let Some(document) = page_document() else { return };
        let payload = read_form(&document);
        let id = editing_id.get_untracked();
        let config = ctx.config();
        spawn_local(async move {
            match api::save_counterparty(&config, id.as_deref(), &payload).await {
                Ok(()) => {
                    dialog::alert(SAVED_TEXT);
                    dialog::reload_page();
                }
                Err(e) => {
                    error!("[COUNTERPARTY] Error saving counterparty: {}", e);
                    dialog::alert(&save_failure_text(&e));
                }
            }
        });
    };

    let delete_counterparty = move |id: String| {
        let config = ctx.config();
        spawn_local(async move {
            match api::delete_counterparty(&config, &id).await {
                Ok(()) => set_reload_trigger.update(|v| *v += 1),
                Err(e) => {
                    error!("[COUNTERPARTY] Error deleting counterparty: {}", e);
                    dialog::alert(&save_failure_text(&e));
                }
            }
        });
    };

    view! {
        <section class="counterparty-panel">
            <div class="section-header">
                <h2>"Контрагенти"</h2>
                <button type="button" class="btn btn-primary btn-sm" on:click=new_counterparty>
                    "+ Додати"
                </button>
            </div>

            <table class="table table-sm counterparty-table">
                <thead>
                    <tr>
                        <th>"Назва"</th>
                        <th>"ЄДРПОУ"</th>
                        <th>"Телефон"</th>
                        <th>"Email"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || counterparties.get().into_iter().enumerate().map(|(index, cp)| {
                        let id = cp.id.clone();
                        let company = cp.field("companyName");
                        view! {
                            <tr data-index=index.to_string()>
                                <td>{cp.display_name()}</td>
                                <td>{cp.field("edrpou")}</td>
                                <td>{cp.field("phone")}</td>
                                <td>{cp.field("email")}</td>
                                <td class="text-end">
                                    <button
                                        type="button"
                                        class="btn btn-sm btn-outline-primary"
                                        on:click=move |_| edit_counterparty(index)
                                    >
                                        "✏️"
                                    </button>
                                    {id.map(|id| view! {
                                        <DeleteConfirmButton
                                            button_class="btn btn-sm btn-outline-danger"
                                            subject=company
                                            on_confirm=move |_: ()| delete_counterparty(id.clone())
                                        />
                                    })}
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            <CounterpartyModal
                open=modal_open
                set_open=set_modal_open
                title=modal_title
                on_save=save_counterparty
            />
        </section>
    }
}

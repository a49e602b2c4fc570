//! Counterparty Modal Component
//!
//! Form rendered from the field table. It stays in the DOM while hidden so the
//! fill path can write into it before the modal opens.

use leptos::prelude::*;

use crate::counterparty_form::{FieldKind, FieldSpec, COUNTERPARTY_FIELDS};

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Tel => "tel",
        FieldKind::Date => "date",
        _ => "text",
    }
}

fn field_control(spec: &'static FieldSpec) -> AnyView {
    match spec.kind {
        FieldKind::Select(options) => view! {
            <select id=spec.key name=spec.key class="form-select">
                {options.iter().map(|&(value, label)| view! {
                    <option value=value>{label}</option>
                }).collect_view()}
            </select>
        }.into_any(),
        FieldKind::TextArea => view! {
            <textarea id=spec.key name=spec.key class="form-control" rows="3"></textarea>
        }.into_any(),
        kind => view! {
            <input id=spec.key name=spec.key type=input_type(kind) class="form-control" />
        }.into_any(),
    }
}

#[component]
pub fn CounterpartyModal(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    title: ReadSignal<&'static str>,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_save.run(());
    };

    view! {
        <div
            class=move || if open.get() { "modal show" } else { "modal" }
            style=move || if open.get() { "display: block;" } else { "display: none;" }
            id="counterpartyModal"
        >
            <div class="modal-dialog modal-lg">
                <form class="modal-content" id="counterpartyForm" on:submit=on_submit>
                    <div class="modal-header">
                        <h5 class="modal-title" id="counterpartyModalTitle">{move || title.get()}</h5>
                        <button type="button" class="btn-close" on:click=move |_| set_open.set(false)></button>
                    </div>
                    <div class="modal-body">
                        <div class="row g-2">
                            {COUNTERPARTY_FIELDS.iter().map(|spec| view! {
                                <div class="col-md-6">
                                    <label class="form-label" for=spec.key>{spec.label}</label>
                                    {field_control(spec)}
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                    <div class="modal-footer">
                        <button type="button" class="btn btn-secondary" on:click=move |_| set_open.set(false)>
                            "Скасувати"
                        </button>
                        <button type="submit" class="btn btn-primary">"Зберегти"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

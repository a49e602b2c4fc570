//! Delete Confirm Button Component
//!
//! Trash button in the counterparty list. Deleting a counterparty cannot be
//! undone, so the first click only asks which record is about to go.

use leptos::prelude::*;

/// Confirmation text naming the counterparty being deleted
pub fn delete_prompt(subject: &str) -> String {
    let subject = subject.trim();
    if subject.is_empty() {
        "Видалити контрагента?".to_string()
    } else {
        format!("Видалити «{}»?", subject)
    }
}

/// Inline delete confirmation for one counterparty row.
///
/// `subject` is the counterparty display name shown in the prompt. The prompt
/// collapses back to the trash button after either answer.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] subject: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);
    let prompt = delete_prompt(&subject);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                type="button"
                class=button_class.clone()
                title="Видалити"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                "🗑️"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    type="button"
                    class="btn btn-sm btn-danger"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "Так"
                </button>
                <button
                    type="button"
                    class="btn btn-sm btn-secondary"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "Ні"
                </button>
            </span>
        </Show>
    }
}

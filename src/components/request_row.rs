//! Request Row Component

use leptos::prelude::*;

use crate::table::RowView;

/// One table row; buttons carry `data-index` for the delegated listener
#[component]
pub fn RequestRow(row: RowView) -> impl IntoView {
    let index = row.index.to_string();
    let status = row.status;

    let buttons = row
        .actions
        .iter()
        .map(|action| {
            view! {
                <button
                    class=action.button_class()
                    data-action=action.data_action()
                    data-index=index.clone()
                >
                    {action.icon()}
                </button>
            }
        })
        .collect_view();

    view! {
        <tr class=status.row_class() data-index=index.clone()>
            <td>{row.created}</td>
            <td>{row.location}</td>
            <td>{row.name}</td>
            <td>{row.issue}</td>
            <td>{row.phone}</td>
            <td>{row.completed}</td>
            <td><span class=status.badge_class()>{status.label()}</span></td>
            <td>
                <div class="btn-group">{buttons}</div>
            </td>
        </tr>
    }
}

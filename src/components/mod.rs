//! UI Components
//!
//! Leptos components for the dashboard and counterparty screens.

mod counterparty_modal;
mod counterparty_panel;
mod delete_confirm_button;
mod request_dashboard;
mod request_row;
mod request_table;
mod request_toolbar;
mod screen_tab_bar;

pub use counterparty_modal::CounterpartyModal;
pub use counterparty_panel::CounterpartyPanel;
pub use delete_confirm_button::DeleteConfirmButton;
pub use request_dashboard::RequestDashboard;
pub use request_row::RequestRow;
pub use request_table::RequestTable;
pub use request_toolbar::RequestToolbar;
pub use screen_tab_bar::ScreenTabBar;

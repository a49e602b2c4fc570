//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;

/// Top-level screen selected in the tab bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Requests,
    Counterparties,
}

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Active screen - read
    pub screen: ReadSignal<Screen>,
    /// Active screen - write
    set_screen: WriteSignal<Screen>,
}

impl AppContext {
    pub fn new(config: AppConfig, screen: (ReadSignal<Screen>, WriteSignal<Screen>)) -> Self {
        Self {
            config: StoredValue::new(config),
            screen: screen.0,
            set_screen: screen.1,
        }
    }

    /// Owned copy of the config, for moving into async tasks
    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn show(&self, screen: Screen) {
        self.set_screen.set(screen);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

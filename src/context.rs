//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to re-fetch backend data - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to re-fetch backend data - write
    set_reload_trigger: WriteSignal<u32>,
    /// Currently active vendor id - read
    pub current_vendor: ReadSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        current_vendor: ReadSignal<Option<String>>,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            current_vendor,
        }
    }

    /// Trigger a re-fetch of the active vendor's data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

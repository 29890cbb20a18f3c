//! Status Line Component
//!
//! Inline success/error feedback for the mapping workspace.

use leptos::prelude::*;

/// Outcome of the last user action
#[derive(Clone, Debug, PartialEq)]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

/// Single status row; empty when nothing happened yet
#[component]
pub fn StatusLine(status: ReadSignal<Option<StatusMessage>>) -> impl IntoView {
    view! {
        {move || match status.get() {
            Some(StatusMessage::Success(msg)) => {
                view! { <div class="status-line success">{msg}</div> }.into_any()
            }
            Some(StatusMessage::Error(msg)) => {
                view! { <div class="status-line error">{msg}</div> }.into_any()
            }
            None => view! { <div class="status-line"></div> }.into_any(),
        }}
    }
}

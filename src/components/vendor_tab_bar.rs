//! Vendor Tab Bar Component
//!
//! Tab bar for switching between the vendors open for mapping.

use leptos::prelude::*;

use crate::models::Vendor;

#[component]
pub fn VendorTabBar(
    vendors: ReadSignal<Vec<Vendor>>,
    current_vendor: ReadSignal<Option<String>>,
    set_current_vendor: WriteSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="vendor-tab-bar">
            <For
                each=move || vendors.get()
                key=|vendor| vendor.id.clone()
                children=move |vendor| {
                    let id = vendor.id.clone();
                    let is_active = {
                        let id = id.clone();
                        move || current_vendor.get().as_deref() == Some(id.as_str())
                    };
                    let tab_class = move || {
                        if is_active() { "vendor-tab active" } else { "vendor-tab" }
                    };

                    view! {
                        <button
                            class=tab_class
                            on:click=move |_| set_current_vendor.set(Some(id.clone()))
                        >
                            {vendor.name.clone()}
                        </button>
                    }
                }
            />

            <Show when=move || vendors.get().is_empty()>
                <span class="no-vendors-note">"No vendors available"</span>
            </Show>
        </div>
    }
}

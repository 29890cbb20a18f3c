//! CatMap Frontend App
//!
//! Top-level component: vendor tabs over the mapping workspace.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{MappingWorkspace, VendorTabBar};
use crate::context::AppContext;
use crate::models::Vendor;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (vendors, set_vendors) = signal(Vec::<Vendor>::new());
    let (current_vendor, set_current_vendor) = signal::<Option<String>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        current_vendor,
    ));

    // Load the vendor list on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_vendor_list().await {
                Ok(loaded) => set_vendors.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[APP] vendor list failed: {}", e).into(),
                    );
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"CatMap"</h1>
                <VendorTabBar
                    vendors=vendors
                    current_vendor=current_vendor
                    set_current_vendor=set_current_vendor
                />
            </header>

            // The workspace is remounted per vendor, which resets
            // searches, pages and selections on every switch.
            {move || match current_vendor.get() {
                Some(vendor_id) => {
                    view! { <MappingWorkspace vendor_id=vendor_id /> }.into_any()
                }
                None => {
                    view! {
                        <div class="empty-state">"Pick a vendor to start mapping"</div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

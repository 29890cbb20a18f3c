//! Mapping Workspace Component
//!
//! Page-level component for one vendor. Owns the three data sets (our
//! forest, vendor forest, mapped rows) and the two selections; all of
//! it is dropped and re-fetched when the vendor changes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{
    CategorySection, FinalSection, MappedTableSection, StatusMessage, VendorSection,
};
use crate::context::AppContext;
use crate::models::{Category, MappingRecord};
use crate::selection::Selection;

#[component]
pub fn MappingWorkspace(vendor_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (our_forest, set_our_forest) = signal(Vec::<Category>::new());
    let (vendor_forest, set_vendor_forest) = signal(Vec::<Category>::new());
    let (mapped_records, set_mapped_records) = signal(Vec::<MappingRecord>::new());
    let (checked_ours, set_checked_ours) = signal(Selection::new());
    let (checked_vendors, set_checked_vendors) = signal(Selection::new());
    let (status, set_status) = signal::<Option<StatusMessage>>(None);

    // Load all three data sets on mount and on every reload trigger.
    // Responses are applied as they arrive; there is no cancellation
    // of in-flight fetches.
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let vendor = vendor_id.clone();
        spawn_local(async move {
            match commands::get_our_categories().await {
                Ok(forest) => set_our_forest.set(forest),
                Err(e) => set_status.set(Some(StatusMessage::Error(e))),
            }
            match commands::get_vendor_categories(&vendor).await {
                Ok(forest) => set_vendor_forest.set(forest),
                Err(e) => set_status.set(Some(StatusMessage::Error(e))),
            }
            match commands::get_mapped_categories(&vendor).await {
                Ok(records) => set_mapped_records.set(records),
                Err(e) => set_status.set(Some(StatusMessage::Error(e))),
            }
        });
    });

    view! {
        <div class="mapping-workspace">
            <div class="workspace-columns">
                <CategorySection
                    forest=our_forest
                    checked=checked_ours
                    set_checked=set_checked_ours
                />
                <VendorSection
                    forest=vendor_forest
                    checked=checked_vendors
                    set_checked=set_checked_vendors
                />
                <MappedTableSection records=mapped_records set_status=set_status />
            </div>

            <FinalSection
                our_forest=our_forest
                checked_ours=checked_ours
                set_checked_ours=set_checked_ours
                checked_vendors=checked_vendors
                set_checked_vendors=set_checked_vendors
                status=status
                set_status=set_status
            />
        </div>
    }
}

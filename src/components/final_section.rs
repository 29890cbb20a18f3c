//! Final Section Component
//!
//! Bottom bar: the two current selections as removable chips, the
//! submit button and the status line. The first checked catalog
//! category is the mapping target.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{StatusLine, StatusMessage};
use crate::context::AppContext;
use crate::mapping::build_mapping_request;
use crate::models::Category;
use crate::selection::Selection;

#[component]
pub fn FinalSection(
    our_forest: ReadSignal<Vec<Category>>,
    checked_ours: ReadSignal<Selection>,
    set_checked_ours: WriteSignal<Selection>,
    checked_vendors: ReadSignal<Selection>,
    set_checked_vendors: WriteSignal<Selection>,
    status: ReadSignal<Option<StatusMessage>>,
    set_status: WriteSignal<Option<StatusMessage>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (submitting, set_submitting) = signal(false);

    let on_submit = move |_| {
        if submitting.get() {
            return;
        }

        let request = match build_mapping_request(
            &checked_ours.get(),
            &checked_vendors.get(),
            &our_forest.get(),
        ) {
            Ok(request) => request,
            Err(message) => {
                set_status.set(Some(StatusMessage::Error(message)));
                return;
            }
        };

        set_submitting.set(true);
        spawn_local(async move {
            match commands::map_vendor_category(
                &request.our_category_id,
                request.vendor_category_ids.clone(),
            )
            .await
            {
                Ok(message) => {
                    // Fresh selections for the next mapping round.
                    set_checked_ours.set(Selection::new());
                    set_checked_vendors.set(Selection::new());
                    set_status.set(Some(StatusMessage::Success(message)));
                    ctx.reload();
                }
                Err(e) => set_status.set(Some(StatusMessage::Error(e))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="final-section">
            <div class="selection-chips">
                <span class="chips-label">"Target:"</span>
                <For
                    each=move || checked_ours.get().items().to_vec()
                    key=|c| c.id.clone()
                    children=move |category| {
                        let remove_target = category.clone();
                        view! {
                            <span class="chip our-chip">
                                {category.name.clone()}
                                <button
                                    class="chip-remove"
                                    on:click=move |_| {
                                        set_checked_ours.update(|s| s.toggle(&remove_target))
                                    }
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>

            <div class="selection-chips">
                <span class="chips-label">"Vendor:"</span>
                <For
                    each=move || checked_vendors.get().items().to_vec()
                    key=|c| c.id.clone()
                    children=move |category| {
                        let remove_target = category.clone();
                        view! {
                            <span class="chip vendor-chip-selected">
                                {category.name.clone()}
                                <button
                                    class="chip-remove"
                                    on:click=move |_| {
                                        set_checked_vendors.update(|s| s.toggle(&remove_target))
                                    }
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>

            <button
                class="submit-btn"
                prop:disabled=move || submitting.get()
                on:click=on_submit
            >
                {move || if submitting.get() { "Mapping..." } else { "Map Selected" }}
            </button>

            <StatusLine status=status />
        </div>
    }
}

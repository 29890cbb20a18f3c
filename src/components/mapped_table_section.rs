//! Mapped Table Section Component
//!
//! Right column: existing mappings grouped per catalog category, with
//! search, pagination and per-vendor-category unmapping.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{PaginationControls, StatusMessage, UnmapConfirmButton};
use crate::context::AppContext;
use crate::mapping::{group_mappings, grouped_matches, GroupedMapping};
use crate::models::MappingRecord;
use crate::tree::{paginate, PAGE_SIZE};

#[component]
pub fn MappedTableSection(
    records: ReadSignal<Vec<MappingRecord>>,
    set_status: WriteSignal<Option<StatusMessage>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1usize);

    // Back to page 1 whenever the mapped list is re-fetched.
    Effect::new(move |_| {
        let _ = records.get();
        set_page.set(1);
    });

    let groups = Memo::new(move |_| {
        let term = search.get();
        group_mappings(&records.get())
            .into_iter()
            .filter(|g| grouped_matches(g, term.trim()))
            .collect::<Vec<_>>()
    });
    let paged = Memo::new(move |_| paginate(&groups.get(), page.get(), PAGE_SIZE));
    let total_pages = Signal::derive(move || paged.get().total_pages);

    let unmap = move |vendor_category_id: String| {
        spawn_local(async move {
            match commands::unmap_vendor_category(&vendor_category_id).await {
                Ok(message) => {
                    set_status.set(Some(StatusMessage::Success(message)));
                    ctx.reload();
                }
                Err(e) => set_status.set(Some(StatusMessage::Error(e))),
            }
        });
    };

    view! {
        <div class="mapped-section">
            <div class="section-header">"Mapped Categories"</div>

            <input
                class="section-search"
                type="text"
                placeholder="Search mappings..."
                prop:value=move || search.get()
                on:input=move |ev| {
                    set_search.set(event_target_value(&ev));
                    set_page.set(1);
                }
            />

            <table class="mapped-table">
                <thead>
                    <tr>
                        <th>"Our Category"</th>
                        <th>"Parent"</th>
                        <th>"Vendor Categories"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || paged.get().items
                        key=|group| group.our_category.id.clone()
                        children=move |group| {
                            let GroupedMapping {
                                our_category,
                                vendor_categories,
                            } = group;
                            let parent = our_category.parent.unwrap_or_else(|| "-".to_string());

                            view! {
                                <tr>
                                    <td class="our-category-cell">{our_category.name}</td>
                                    <td class="parent-cell">{parent}</td>
                                    <td class="vendor-cell">
                                        <For
                                            each=move || vendor_categories.clone()
                                            key=|v| v.id.clone()
                                            children=move |vendor| {
                                                let vendor_id = vendor.id.clone();
                                                let label = match vendor.product_count {
                                                    Some(count) => format!("{} ({})", vendor.name, count),
                                                    None => vendor.name.clone(),
                                                };

                                                view! {
                                                    <span class="vendor-chip">
                                                        {label}
                                                        <UnmapConfirmButton on_confirm=move |_| unmap(vendor_id.clone()) />
                                                    </span>
                                                }
                                            }
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || paged.get().items.is_empty()>
                <div class="empty-note">"No mappings yet"</div>
            </Show>

            <PaginationControls page=page set_page=set_page total_pages=total_pages />
        </div>
    }
}

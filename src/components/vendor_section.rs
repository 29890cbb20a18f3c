//! Vendor Section Component
//!
//! Middle column: the active vendor's category tree with search,
//! pagination, checkbox selection and per-node product counts.

use leptos::prelude::*;

use crate::components::{CategoryTreeNode, PaginationControls, SearchHitRow};
use crate::models::Category;
use crate::selection::Selection;
use crate::tree::{paginate, search_categories, PAGE_SIZE};

#[component]
pub fn VendorSection(
    forest: ReadSignal<Vec<Category>>,
    checked: ReadSignal<Selection>,
    set_checked: WriteSignal<Selection>,
) -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1usize);

    // Back to page 1 whenever the vendor feed is replaced.
    Effect::new(move |_| {
        let _ = forest.get();
        set_page.set(1);
    });

    let hits = Memo::new(move |_| search_categories(&forest.get(), search.get().trim()));
    let paged = Memo::new(move |_| paginate(&hits.get(), page.get(), PAGE_SIZE));
    let searching = Memo::new(move |_| !search.get().trim().is_empty());
    let total_pages = Signal::derive(move || paged.get().total_pages);

    view! {
        <div class="tree-section">
            <div class="section-header">"Vendor Categories"</div>

            <input
                class="section-search"
                type="text"
                placeholder="Search vendor categories..."
                prop:value=move || search.get()
                on:input=move |ev| {
                    set_search.set(event_target_value(&ev));
                    set_page.set(1);
                }
            />

            <div class="section-body">
                {move || if searching.get() {
                    view! {
                        <For
                            each=move || paged.get().items
                            key=|hit| hit.category.id.clone()
                            children=move |hit| {
                                view! {
                                    <SearchHitRow
                                        hit=hit
                                        show_count=true
                                        checked=checked
                                        set_checked=set_checked
                                    />
                                }
                            }
                        />
                    }
                    .into_any()
                } else {
                    view! {
                        <For
                            each=move || paged.get().items
                            key=|hit| hit.category.id.clone()
                            children=move |hit| {
                                view! {
                                    <CategoryTreeNode
                                        category=hit.category
                                        depth=0
                                        show_count=true
                                        checked=checked
                                        set_checked=set_checked
                                    />
                                }
                            }
                        />
                    }
                    .into_any()
                }}

                <Show when=move || paged.get().items.is_empty()>
                    <div class="empty-note">"No vendor categories"</div>
                </Show>
            </div>

            <PaginationControls page=page set_page=set_page total_pages=total_pages />
        </div>
    }
}

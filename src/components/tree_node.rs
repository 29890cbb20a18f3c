//! Tree Node Components
//!
//! Recursive checkbox rows for a category forest, plus the flat row
//! used when a search is active.

use leptos::prelude::*;

use crate::models::Category;
use crate::selection::Selection;
use crate::tree::SearchHit;

/// Recursive category row with checkbox and expand/collapse toggle
#[component]
pub fn CategoryTreeNode(
    category: Category,
    depth: usize,
    show_count: bool,
    checked: ReadSignal<Selection>,
    set_checked: WriteSignal<Selection>,
) -> impl IntoView {
    let id = category.id.clone();
    let name = category.name.clone();
    let count = category.product_count;
    let children = category.children.clone();
    let has_children = !children.is_empty();
    let indent = depth * 16;

    let (expanded, set_expanded) = signal(true);

    let toggle_target = category.clone();
    let is_checked = {
        let id = id.clone();
        move || checked.get().contains(&id)
    };

    view! {
        <div class="category-tree-item">
            <div class="category-tree-row" style=format!("padding-left: {}px;", indent + 8)>
                // Expand/collapse toggle
                {if has_children {
                    view! {
                        <button
                            class="expand-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_expanded.update(|v| *v = !*v);
                            }
                        >
                            {move || if expanded.get() { "▼" } else { "▶" }}
                        </button>
                    }
                    .into_any()
                } else {
                    view! { <span class="expand-placeholder">"·"</span> }.into_any()
                }}

                <input
                    type="checkbox"
                    prop:checked=is_checked
                    on:change=move |_| set_checked.update(|s| s.toggle(&toggle_target))
                />

                <span class="category-name">{name}</span>

                {if show_count {
                    view! {
                        <span class="category-count">
                            {count.map(|c| format!("({})", c)).unwrap_or_default()}
                        </span>
                    }
                    .into_any()
                } else {
                    view! { <span></span> }.into_any()
                }}
            </div>

            // Children (recursive)
            {move || {
                let children = children.clone();
                if expanded.get() && has_children {
                    view! {
                        <div class="category-tree-children">
                            <For
                                each=move || children.clone()
                                key=|child| child.id.clone()
                                children=move |child| {
                                    view! {
                                        <CategoryTreeNode
                                            category=child
                                            depth=depth + 1
                                            show_count=show_count
                                            checked=checked
                                            set_checked=set_checked
                                        />
                                    }
                                }
                            />
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <div></div> }.into_any()
                }
            }}
        </div>
    }
}

/// Flat row for one search match, with its ancestor breadcrumb
#[component]
pub fn SearchHitRow(
    hit: SearchHit,
    show_count: bool,
    checked: ReadSignal<Selection>,
    set_checked: WriteSignal<Selection>,
) -> impl IntoView {
    let id = hit.category.id.clone();
    let name = hit.category.name.clone();
    let count = hit.category.product_count;
    let breadcrumb = hit
        .parent_path
        .iter()
        .map(|c| c.name.clone())
        .collect::<Vec<_>>()
        .join(" › ");

    let toggle_target = hit.category.clone();
    let is_checked = {
        let id = id.clone();
        move || checked.get().contains(&id)
    };

    view! {
        <div class="search-hit-row">
            <input
                type="checkbox"
                prop:checked=is_checked
                on:change=move |_| set_checked.update(|s| s.toggle(&toggle_target))
            />

            {if breadcrumb.is_empty() {
                view! { <span></span> }.into_any()
            } else {
                view! { <span class="search-hit-path">{breadcrumb}</span> }.into_any()
            }}

            <span class="category-name">{name}</span>

            {if show_count {
                view! {
                    <span class="category-count">
                        {count.map(|c| format!("({})", c)).unwrap_or_default()}
                    </span>
                }
                .into_any()
            } else {
                view! { <span></span> }.into_any()
            }}
        </div>
    }
}

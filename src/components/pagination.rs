//! Pagination Controls Component

use leptos::prelude::*;

/// Prev/next pager clamped to `[1, total_pages]`
#[component]
pub fn PaginationControls(
    page: ReadSignal<usize>,
    set_page: WriteSignal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
) -> impl IntoView {
    let at_start = move || page.get() <= 1;
    let at_end = move || page.get() >= total_pages.get();

    view! {
        <div class="pagination">
            <button
                class="page-btn"
                prop:disabled=at_start
                on:click=move |_| set_page.update(|p| {
                    if *p > 1 {
                        *p -= 1;
                    }
                })
            >
                "‹"
            </button>
            <span class="page-label">
                {move || format!("page {} / {}", page.get(), total_pages.get())}
            </span>
            <button
                class="page-btn"
                prop:disabled=at_end
                on:click=move |_| {
                    let total = total_pages.get();
                    set_page.update(|p| {
                        if *p < total {
                            *p += 1;
                        }
                    });
                }
            >
                "›"
            </button>
        </div>
    }
}

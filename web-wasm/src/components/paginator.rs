//! ページ送りコンポーネント

use artworks_common::PaginationController;
use leptos::prelude::*;

/// "1 - 12 / 129884" 形式の表示範囲
pub fn range_label(controller: &PaginationController) -> String {
    let total = controller.total_records();
    if total == 0 {
        return "0件".to_string();
    }
    let first = controller.first_record_offset() + 1;
    let last = (first + u64::from(controller.page_size()) - 1).min(total);
    format!("{} - {} / {}", first, last, total)
}

#[component]
pub fn Paginator<FP>(controller: RwSignal<PaginationController>, on_page_change: FP) -> impl IntoView
where
    FP: Fn(u32) + 'static + Clone + Send,
{
    let page_index = move || controller.with(|c| c.page_index());
    let total_pages = move || controller.with(|c| c.total_pages());
    let has_previous = move || controller.with(|c| c.has_previous());
    let has_next = move || controller.with(|c| c.has_next());

    view! {
        <div class="paginator">
            <button
                class="btn btn-small"
                disabled=move || !has_previous()
                on:click={
                    let on_page_change = on_page_change.clone();
                    move |_| on_page_change(0)
                }
            >
                "«"
            </button>
            <button
                class="btn btn-small"
                disabled=move || !has_previous()
                on:click={
                    let on_page_change = on_page_change.clone();
                    move |_| on_page_change(page_index().saturating_sub(1))
                }
            >
                "‹"
            </button>
            <span class="page-status">
                {move || {
                    if total_pages() == 0 {
                        "- / -".to_string()
                    } else {
                        format!("{} / {}", page_index() + 1, total_pages())
                    }
                }}
            </span>
            <button
                class="btn btn-small"
                disabled=move || !has_next()
                on:click={
                    let on_page_change = on_page_change.clone();
                    move |_| on_page_change(page_index() + 1)
                }
            >
                "›"
            </button>
            <button
                class="btn btn-small"
                disabled=move || !has_next()
                on:click={
                    let on_page_change = on_page_change.clone();
                    move |_| on_page_change(total_pages().saturating_sub(1))
                }
            >
                "»"
            </button>
            <span class="page-range">{move || controller.with(range_label)}</span>
        </div>
    }
}

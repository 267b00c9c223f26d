//! ヘッダーコンポーネント

use artworks_common::SelectionStore;
use leptos::prelude::*;

#[component]
pub fn Header(selection: RwSignal<SelectionStore>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Artworks"</h1>
            <span class="selection-count">
                {move || format!("選択中: {}件", selection.with(|s| s.len()))}
            </span>
        </header>
    }
}

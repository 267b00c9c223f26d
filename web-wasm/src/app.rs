//! メインアプリケーションコンポーネント
//!
//! ページ送りの状態と選択集合をシグナルで持ち、表・ページ送り・
//! 一括選択ダイアログから操作する。

use crate::api::artic::ArticSource;
use crate::components::{
    artworks_table::ArtworksTable,
    header::Header,
    paginator::Paginator,
    row_count_dialog::RowCountDialog,
};
use artworks_common::{
    expand_selection, PageSource, PaginationController, SelectionStore, SourceConfig,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let source = StoredValue::new(ArticSource::new(SourceConfig::default()));

    // アプリケーション状態
    let controller = RwSignal::new(PaginationController::default());
    let selection = RwSignal::new(SelectionStore::new());
    let dialog_visible = RwSignal::new(false);
    let row_count = RwSignal::new(0u64);
    let (bulk_running, set_bulk_running) = signal(false);
    let (bulk_progress, set_bulk_progress) = signal(None::<(u32, u32)>);

    // ページ読み込み
    let load_page = move |page_index: u32| {
        let mut page_number = 0;
        controller.update(|c| page_number = c.begin_load(page_index));
        let source = source.get_value();
        spawn_local(async move {
            let result = source.fetch_page(page_number).await;
            controller.update(|c| {
                // 後から別ページに切り替えられていたら古い結果は捨てる
                if c.page_index() == page_index {
                    c.complete_load(result);
                }
            });
        });
    };

    // 初回表示
    load_page(0);

    let open_dialog = move |_| {
        row_count.set(0);
        dialog_visible.set(true);
    };

    let close_dialog = move |_| {
        if !bulk_running.get_untracked() {
            dialog_visible.set(false);
        }
    };

    // 一括選択: 現在のページから count 件
    let save_row_selection = move |count: u64| {
        if bulk_running.get_untracked() {
            return;
        }
        set_bulk_running.set(true);
        set_bulk_progress.set(None);

        let source = source.get_value();
        let (start_page, total_pages) =
            controller.with_untracked(|c| (c.page_index(), c.total_pages()));
        let current = selection.get_untracked();

        spawn_local(async move {
            let outcome = expand_selection(&source, &current, start_page, count, total_pages, |page, total| {
                set_bulk_progress.set(Some((page, total)));
            })
            .await;
            selection.set(outcome.selection);
            set_bulk_running.set(false);
            dialog_visible.set(false);
        });
    };

    view! {
        <div class="container">
            <Header selection=selection />

            <ArtworksTable
                controller=controller
                selection=selection
                on_open_dialog=open_dialog
            />

            <Paginator controller=controller on_page_change=load_page />

            <Show when=move || dialog_visible.get()>
                <RowCountDialog
                    row_count=row_count
                    is_running=bulk_running
                    progress=bulk_progress
                    on_cancel=close_dialog
                    on_save=save_row_selection
                />
            </Show>
        </div>
    }
}

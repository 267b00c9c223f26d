//! 閲覧セッション
//!
//! ページ送りの状態と選択集合をまとめて持つコンテキスト。
//! セッション開始時に1回作り、終了とともに破棄する。
//! 表示側（ブラウザの表、CLI）はここの操作だけを呼ぶ。

use crate::expander::{expand_selection, ExpandOutcome};
use crate::pagination::{LoadState, PaginationController};
use crate::selection::SelectionStore;
use crate::source::PageSource;
use crate::types::{Record, RecordId};

pub struct ViewerSession<S> {
    source: S,
    pagination: PaginationController,
    selection: SelectionStore,
}

impl<S: PageSource> ViewerSession<S> {
    pub fn new(source: S, page_size: u32) -> Self {
        Self {
            source,
            pagination: PaginationController::new(page_size),
            selection: SelectionStore::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn pagination(&self) -> &PaginationController {
        &self.pagination
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    /// 表示中ページの作品
    pub fn visible_records(&self) -> &[Record] {
        self.pagination.records()
    }

    pub fn visible_ids(&self) -> Vec<RecordId> {
        self.pagination.visible_ids()
    }

    /// 初回表示（先頭ページを読み込む）
    pub async fn mount(&mut self) -> LoadState {
        self.on_page_change(0).await
    }

    /// ページ切り替え
    pub async fn on_page_change(&mut self, page_index: u32) -> LoadState {
        self.pagination.load(&self.source, page_index).await
    }

    pub fn toggle_row(&mut self, id: RecordId) {
        self.selection.toggle(id);
    }

    pub fn is_row_selected(&self, id: RecordId) -> bool {
        self.selection.is_selected(id)
    }

    pub fn are_all_visible_selected(&self, visible_ids: &[RecordId]) -> bool {
        self.selection.are_all_selected(visible_ids.iter().copied())
    }

    pub fn select_all_visible(&mut self, visible_ids: &[RecordId]) {
        self.selection.add_many(visible_ids.iter().copied());
    }

    pub fn deselect_all_visible(&mut self, visible_ids: &[RecordId]) {
        self.selection.remove_many(visible_ids.iter().copied());
    }

    /// ヘッダーのチェックボックス
    ///
    /// 表示中ページがすべて選択済みなら全解除、そうでなければ全選択。
    ///
    /// # Returns
    /// 操作後に表示中ページがすべて選択されているか
    pub fn toggle_all_visible(&mut self) -> bool {
        let visible = self.visible_ids();
        self.selection.toggle_all(&visible)
    }

    /// 現在のページから count 件を一括選択し、選択集合を置き換える
    pub async fn request_bulk_selection(&mut self, count: u64) -> ExpandOutcome {
        self.request_bulk_selection_with_progress(count, |_, _| {}).await
    }

    pub async fn request_bulk_selection_with_progress<F>(
        &mut self,
        count: u64,
        on_progress: F,
    ) -> ExpandOutcome
    where
        F: FnMut(u32, u32),
    {
        let outcome = expand_selection(
            &self.source,
            &self.selection,
            self.pagination.page_index(),
            count,
            self.pagination.total_pages(),
            on_progress,
        )
        .await;
        self.selection.replace(outcome.selection.clone());
        outcome
    }
}

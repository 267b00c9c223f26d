//! ページ送り
//!
//! 現在のページ番号・総件数・表示中ページの作品を保持し、
//! 読み込み状態を Idle → Loading → Loaded / Failed で管理する。
//!
//! 取得失敗時は前のページ内容と総件数をそのまま残す（古い表示を続ける）。

use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::Result;
use crate::source::PageSource;
use crate::types::{page_count, Page, Record, RecordId};

/// 読み込み状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl LoadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Loaded => "loaded",
            LoadState::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationController {
    /// 0始まり
    page_index: u32,
    page_size: u32,
    /// 最後に取得できた総件数
    total_records: u64,
    state: LoadState,
    records: Vec<Record>,
}

impl Default for PaginationController {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationController {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_index: 0,
            page_size,
            total_records: 0,
            state: LoadState::Idle,
            records: Vec::new(),
        }
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    /// ceil(total_records / page_size)
    pub fn total_pages(&self) -> u32 {
        page_count(self.total_records, self.page_size)
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// 表示中ページの作品（サーバー順）
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn visible_ids(&self) -> Vec<RecordId> {
        self.records.iter().map(|r| r.id).collect()
    }

    /// 表示中ページ先頭の通し番号（0始まり）
    pub fn first_record_offset(&self) -> u64 {
        u64::from(self.page_index) * u64::from(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.total_pages()
    }

    /// 読み込み開始。どの状態からでも Loading に入る
    ///
    /// 範囲外のページ番号は丸めない（呼び出し側で防ぐ）。
    ///
    /// # Returns
    /// 取得するページ番号（1始まり）
    pub fn begin_load(&mut self, page_index: u32) -> u32 {
        tracing::debug!(
            from = self.state.as_str(),
            page_index,
            "ページ読み込み開始"
        );
        self.page_index = page_index;
        self.state = LoadState::Loading;
        page_index + 1
    }

    /// 読み込み結果を反映
    ///
    /// 失敗はログに残すだけで、表示中の作品と総件数は変更しない。
    pub fn complete_load(&mut self, result: Result<Page>) -> LoadState {
        match result {
            Ok(page) => {
                self.total_records = page.total_count;
                self.records = page.records;
                self.state = LoadState::Loaded;
                tracing::debug!(
                    page_index = self.page_index,
                    rows = self.records.len(),
                    total_records = self.total_records,
                    "ページ読み込み完了"
                );
            }
            Err(e) => {
                tracing::warn!(
                    page = self.page_index + 1,
                    error = %e,
                    "ページ取得に失敗しました"
                );
                self.state = LoadState::Failed;
            }
        }
        self.state
    }

    /// begin_load → 取得 → complete_load
    pub async fn load<S: PageSource>(&mut self, source: &S, page_index: u32) -> LoadState {
        let page_number = self.begin_load(page_index);
        let result = source.fetch_page(page_number).await;
        self.complete_load(result)
    }
}

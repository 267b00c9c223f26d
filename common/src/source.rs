//! ページ取得元
//!
//! 実装:
//! - ブラウザ: fetch API（artworks-wasm）
//! - CLI: reqwest（artworks-viewer）
//! - MemoryPageSource: メモリ上の作品リスト（テスト・デモ用）

use crate::error::{Error, Result};
use crate::types::{Page, Record, RecordId};
use std::cell::RefCell;
use std::collections::BTreeSet;

/// 1ページ分の作品を取得する
///
/// ブラウザのfetchはSendでないため、Futureに Send を要求しない。
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// # Arguments
    /// * `page_number` - 1始まりのページ番号（APIの `?page=`）
    async fn fetch_page(&self, page_number: u32) -> Result<Page>;
}

impl<S: PageSource> PageSource for &S {
    async fn fetch_page(&self, page_number: u32) -> Result<Page> {
        (**self).fetch_page(page_number).await
    }
}

/// メモリ上の作品リストをページ単位で返す取得元
///
/// 指定ページで Transport エラーを返すように設定できる。
#[derive(Debug, Default)]
pub struct MemoryPageSource {
    records: Vec<Record>,
    page_size: u32,
    failing_pages: BTreeSet<u32>,
    fetch_log: RefCell<Vec<u32>>,
}

impl MemoryPageSource {
    pub fn new(records: Vec<Record>, page_size: u32) -> Self {
        Self {
            records,
            page_size,
            failing_pages: BTreeSet::new(),
            fetch_log: RefCell::new(Vec::new()),
        }
    }

    /// IDだけの作品で作る
    pub fn with_ids<I>(ids: I, page_size: u32) -> Self
    where
        I: IntoIterator<Item = RecordId>,
    {
        Self::new(ids.into_iter().map(Record::placeholder).collect(), page_size)
    }

    /// 指定ページ（1始まり）の取得を失敗させる
    pub fn fail_page(mut self, page_number: u32) -> Self {
        self.failing_pages.insert(page_number);
        self
    }

    /// これまでに要求されたページ番号（要求順）
    pub fn fetch_log(&self) -> Vec<u32> {
        self.fetch_log.borrow().clone()
    }

    pub fn total_count(&self) -> u64 {
        self.records.len() as u64
    }
}

impl PageSource for MemoryPageSource {
    async fn fetch_page(&self, page_number: u32) -> Result<Page> {
        self.fetch_log.borrow_mut().push(page_number);

        if self.failing_pages.contains(&page_number) {
            return Err(Error::Transport(format!(
                "page {} の取得に失敗しました",
                page_number
            )));
        }
        if page_number == 0 {
            return Err(Error::Transport("ページ番号は1から始まります".into()));
        }

        let size = self.page_size as usize;
        let start = (page_number as usize - 1).saturating_mul(size);
        let records = self
            .records
            .iter()
            .skip(start)
            .take(size)
            .cloned()
            .collect();

        Ok(Page {
            records,
            total_count: self.total_count(),
        })
    }
}

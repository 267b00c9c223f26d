//! 「先頭からN件を選択」の一括選択
//!
//! 開始ページから順にページを取得し、サーバー順でIDを作業用の集合に
//! 追加していく。N件に達するか最終ページを過ぎたら終了する。
//!
//! - ページ取得は1件ずつ順番に行う（並行取得しない）
//! - 取得失敗したページは再試行せずに飛ばし、件数にも数えない
//! - 総ページ数は呼び出し時点の値で固定（途中で取り直さない）
//! - 結果の集合は呼び出し側が1回の代入で置き換える

use crate::selection::SelectionStore;
use crate::source::PageSource;

/// 一括選択の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandOutcome {
    /// 置き換え後の選択集合（元の選択 ∪ 追加分）
    pub selection: SelectionStore,
    /// 要求件数
    pub requested: u64,
    /// 追加対象にした件数（既に選択済みのIDも含む）
    pub collected: u64,
    pub pages_fetched: u32,
    pub pages_failed: u32,
}

impl ExpandOutcome {
    /// 要求件数をすべて集められたか
    pub fn is_satisfied(&self) -> bool {
        self.collected >= self.requested
    }
}

/// 一括選択を実行
///
/// # Arguments
/// * `source` - ページ取得元
/// * `current` - 現在の選択（コピーして作業用にする。元は変更しない）
/// * `start_page` - 開始ページ（0始まり）
/// * `count` - 選択する件数
/// * `total_pages` - 総ページ数（この呼び出しの間は固定）
/// * `on_progress` - 各ページ取得前に (ページ番号0始まり, 総ページ数) で呼ばれる
pub async fn expand_selection<S, F>(
    source: &S,
    current: &SelectionStore,
    start_page: u32,
    count: u64,
    total_pages: u32,
    mut on_progress: F,
) -> ExpandOutcome
where
    S: PageSource,
    F: FnMut(u32, u32),
{
    let mut working = current.clone();
    let mut remaining = count;
    let mut cursor = start_page;
    let mut pages_fetched = 0;
    let mut pages_failed = 0;

    while remaining > 0 && cursor < total_pages {
        on_progress(cursor, total_pages);

        match source.fetch_page(cursor + 1).await {
            Ok(page) => {
                pages_fetched += 1;
                for record in &page.records {
                    if remaining == 0 {
                        break;
                    }
                    working.add_many([record.id]);
                    remaining -= 1;
                }
            }
            Err(e) => {
                pages_failed += 1;
                tracing::warn!(
                    page = cursor + 1,
                    error = %e,
                    "一括選択: ページ取得に失敗したため飛ばします"
                );
            }
        }

        cursor += 1;
    }

    let outcome = ExpandOutcome {
        selection: working,
        requested: count,
        collected: count - remaining,
        pages_fetched,
        pages_failed,
    };

    tracing::info!(
        requested = outcome.requested,
        collected = outcome.collected,
        pages_fetched,
        pages_failed,
        "一括選択完了"
    );

    outcome
}

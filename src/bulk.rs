//! 一括選択（進捗バー付き）

use artworks_common::{ExpandOutcome, PageSource, ViewerSession};
use indicatif::{ProgressBar, ProgressStyle};

fn progress_bar(pages: u64) -> ProgressBar {
    let bar = ProgressBar::new(pages);
    let style = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    bar.set_style(style);
    bar
}

/// 現在のページから count 件を一括選択
pub async fn run_bulk_selection<S: PageSource>(
    session: &mut ViewerSession<S>,
    count: u64,
) -> ExpandOutcome {
    let start = session.pagination().page_index();
    let total = session.pagination().total_pages();
    let bar = progress_bar(u64::from(total.saturating_sub(start)));

    let outcome = session
        .request_bulk_selection_with_progress(count, |page, total_pages| {
            bar.set_position(u64::from(page - start));
            bar.set_message(format!("{}/{}ページ目を取得中", page + 1, total_pages));
        })
        .await;

    bar.finish_and_clear();
    outcome
}

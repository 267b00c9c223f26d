//! 対話式ブラウズ
//!
//! ページを移動しながら行を選択する。選択はページをまたいで保持され、
//! 終了時に選択IDの一覧を表示する。

use crate::bulk::run_bulk_selection;
use crate::error::Result;
use crate::render::{render_outcome, render_page, render_selection, render_status};
use artworks_common::{LoadState, PageSource, PaginationController, RecordId, ViewerSession};
use dialoguer::{Input, Select};

/// 対話アクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    /// 次のページ
    Next,
    /// 前のページ
    Previous,
    /// ページ番号を指定して移動
    Jump,
    /// IDを指定して行の選択を切り替え
    ToggleRow,
    /// 表示中ページをすべて選択/解除
    ToggleAllVisible,
    /// 先頭N件を一括選択
    BulkSelect,
    /// 選択中のIDを表示
    ShowSelection,
    /// 終了
    Quit,
}

impl BrowseAction {
    pub fn label(&self) -> &'static str {
        match self {
            BrowseAction::Next => "次のページ",
            BrowseAction::Previous => "前のページ",
            BrowseAction::Jump => "ページ移動",
            BrowseAction::ToggleRow => "行の選択を切り替え",
            BrowseAction::ToggleAllVisible => "このページを全選択/全解除",
            BrowseAction::BulkSelect => "先頭から件数を指定して選択",
            BrowseAction::ShowSelection => "選択中のIDを表示",
            BrowseAction::Quit => "終了",
        }
    }
}

/// 現在の状態で選べるアクション
pub fn available_actions(pagination: &PaginationController) -> Vec<BrowseAction> {
    let mut actions = Vec::new();
    if pagination.has_next() {
        actions.push(BrowseAction::Next);
    }
    if pagination.has_previous() {
        actions.push(BrowseAction::Previous);
    }
    if pagination.total_pages() > 1 {
        actions.push(BrowseAction::Jump);
    }
    if !pagination.records().is_empty() {
        actions.push(BrowseAction::ToggleRow);
        actions.push(BrowseAction::ToggleAllVisible);
    }
    if pagination.total_pages() > 0 {
        actions.push(BrowseAction::BulkSelect);
    }
    actions.push(BrowseAction::ShowSelection);
    actions.push(BrowseAction::Quit);
    actions
}

fn prompt_action(pagination: &PaginationController) -> Result<BrowseAction> {
    let actions = available_actions(pagination);
    let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
    let index = Select::new()
        .with_prompt("操作")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(actions[index])
}

fn report_load(state: LoadState) {
    if state == LoadState::Failed {
        println!("⚠ ページを取得できませんでした。前の表示を続けます");
    }
}

/// 対話式でページを移動しながら選択
pub async fn run_interactive_browse<S: PageSource>(
    session: &mut ViewerSession<S>,
    start_index: u32,
) -> Result<()> {
    report_load(session.on_page_change(start_index).await);

    loop {
        println!();
        println!("{}", render_page(session.visible_records(), session.selection()));
        println!("{}", render_status(session.pagination(), session.selection()));

        match prompt_action(session.pagination())? {
            BrowseAction::Next => {
                let next = session.pagination().page_index() + 1;
                report_load(session.on_page_change(next).await);
            }
            BrowseAction::Previous => {
                let previous = session.pagination().page_index().saturating_sub(1);
                report_load(session.on_page_change(previous).await);
            }
            BrowseAction::Jump => {
                let total = session.pagination().total_pages();
                let page: u32 = Input::new()
                    .with_prompt(format!("ページ番号 (1-{})", total))
                    .validate_with(|input: &u32| -> std::result::Result<(), String> {
                        if (1..=total).contains(input) {
                            Ok(())
                        } else {
                            Err(format!("1から{}の範囲で入力してください", total))
                        }
                    })
                    .interact_text()?;
                report_load(session.on_page_change(page - 1).await);
            }
            BrowseAction::ToggleRow => {
                let id: RecordId = Input::new().with_prompt("作品ID").interact_text()?;
                if session.visible_ids().contains(&id) {
                    session.toggle_row(id);
                } else {
                    println!("  → ID {} はこのページにありません", id);
                }
            }
            BrowseAction::ToggleAllVisible => {
                if session.toggle_all_visible() {
                    println!("  → このページをすべて選択しました");
                } else {
                    println!("  → このページの選択を解除しました");
                }
            }
            BrowseAction::BulkSelect => {
                let count: u64 = Input::new()
                    .with_prompt("選択する件数")
                    .default(0)
                    .interact_text()?;
                let outcome = run_bulk_selection(session, count).await;
                println!("  → {}", render_outcome(&outcome));
            }
            BrowseAction::ShowSelection => {
                println!("選択中 ({}件): {}", session.selection().len(), render_selection(session.selection()));
            }
            BrowseAction::Quit => break,
        }
    }

    println!();
    println!("✓ 選択中 ({}件): {}", session.selection().len(), render_selection(session.selection()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use artworks_common::{Page, Record};

    fn loaded(page_index: u32, ids: &[RecordId], total: u64) -> PaginationController {
        let mut pagination = PaginationController::new(2);
        pagination.begin_load(page_index);
        pagination.complete_load(Ok(Page {
            records: ids.iter().copied().map(Record::placeholder).collect(),
            total_count: total,
        }));
        pagination
    }

    #[test]
    fn test_actions_before_load() {
        let actions = available_actions(&PaginationController::new(2));
        assert_eq!(actions, vec![BrowseAction::ShowSelection, BrowseAction::Quit]);
    }

    #[test]
    fn test_actions_first_page() {
        let actions = available_actions(&loaded(0, &[1, 2], 6));
        assert_eq!(actions.first(), Some(&BrowseAction::Next));
        assert!(!actions.contains(&BrowseAction::Previous));
        assert!(actions.contains(&BrowseAction::BulkSelect));
        assert_eq!(actions.last(), Some(&BrowseAction::Quit));
    }

    #[test]
    fn test_actions_last_page() {
        let actions = available_actions(&loaded(2, &[5, 6], 6));
        assert!(!actions.contains(&BrowseAction::Next));
        assert!(actions.contains(&BrowseAction::Previous));
        assert!(actions.contains(&BrowseAction::ToggleRow));
    }

    #[test]
    fn test_single_page_has_no_jump() {
        let actions = available_actions(&loaded(0, &[1], 1));
        assert!(!actions.contains(&BrowseAction::Jump));
        assert!(!actions.contains(&BrowseAction::Next));
    }

    #[test]
    fn test_labels_are_distinct() {
        let all = [
            BrowseAction::Next,
            BrowseAction::Previous,
            BrowseAction::Jump,
            BrowseAction::ToggleRow,
            BrowseAction::ToggleAllVisible,
            BrowseAction::BulkSelect,
            BrowseAction::ShowSelection,
            BrowseAction::Quit,
        ];
        let labels: std::collections::HashSet<_> = all.iter().map(|a| a.label()).collect();
        assert_eq!(labels.len(), all.len());
    }
}

//! 端末向けの表示整形

use artworks_common::{ExpandOutcome, PaginationController, Record, SelectionStore};

const TITLE_WIDTH: usize = 32;
const ORIGIN_WIDTH: usize = 14;
const ARTIST_WIDTH: usize = 28;
const INSCRIPTIONS_WIDTH: usize = 18;

/// 改行をまとめて1行にし、最大文字数で切り詰める
pub fn truncate(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let kept: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

fn year(value: i64) -> String {
    if value == 0 {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// 作品1行
pub fn render_row(record: &Record, selected: bool) -> String {
    format!(
        "[{}] {:>8}  {}  {}  {}  {}  {:>6} {:>6}",
        if selected { "x" } else { " " },
        record.id,
        pad(&truncate(&record.title, TITLE_WIDTH), TITLE_WIDTH),
        pad(&truncate(&record.place_of_origin, ORIGIN_WIDTH), ORIGIN_WIDTH),
        pad(&truncate(&record.artist_display, ARTIST_WIDTH), ARTIST_WIDTH),
        pad(&truncate(&record.inscriptions, INSCRIPTIONS_WIDTH), INSCRIPTIONS_WIDTH),
        year(record.date_start),
        year(record.date_end),
    )
}

/// 表示中ページの表
pub fn render_page(records: &[Record], selection: &SelectionStore) -> String {
    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(format!(
        "    {:>8}  {}  {}  {}  {}  {:>6} {:>6}",
        "ID",
        pad("Title", TITLE_WIDTH),
        pad("Place of Origin", ORIGIN_WIDTH),
        pad("Artist Display", ARTIST_WIDTH),
        pad("Inscriptions", INSCRIPTIONS_WIDTH),
        "Start",
        "End",
    ));
    lines.push("-".repeat(lines[0].chars().count()));

    if records.is_empty() {
        lines.push("  (作品がありません)".to_string());
    }
    for record in records {
        lines.push(render_row(record, selection.is_selected(record.id)));
    }
    lines.join("\n")
}

/// ページ位置と選択件数
pub fn render_status(pagination: &PaginationController, selection: &SelectionStore) -> String {
    let total_pages = pagination.total_pages();
    let page = if total_pages == 0 {
        0
    } else {
        pagination.page_index() + 1
    };
    format!(
        "ページ {}/{} (全{}件) | 選択中: {}件",
        page,
        total_pages,
        pagination.total_records(),
        selection.len()
    )
}

/// 一括選択の結果
pub fn render_outcome(outcome: &ExpandOutcome) -> String {
    let mut text = format!(
        "{}件中{}件を選択 (取得{}ページ",
        outcome.requested, outcome.collected, outcome.pages_fetched
    );
    if outcome.pages_failed > 0 {
        text.push_str(&format!(", 失敗{}ページ", outcome.pages_failed));
    }
    text.push(')');
    if !outcome.is_satisfied() {
        text.push_str(" ※最終ページに到達したか取得に失敗したため要求件数に届きませんでした");
    }
    text
}

/// 選択IDを1行に並べる
pub fn render_selection(selection: &SelectionStore) -> String {
    if selection.is_empty() {
        return "(選択なし)".to_string();
    }
    selection
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, title: &str) -> Record {
        Record {
            title: title.to_string(),
            ..Record::placeholder(id)
        }
    }

    #[test]
    fn test_truncate_short_text() {
        assert_eq!(truncate("Nighthawks", 20), "Nighthawks");
    }

    #[test]
    fn test_truncate_long_text() {
        let result = truncate("The Bedroom at Arles, 1889", 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with('…'));
    }

    #[test]
    fn test_truncate_flattens_newlines() {
        assert_eq!(
            truncate("Vincent van Gogh\nDutch, 1853-1890", 50),
            "Vincent van Gogh Dutch, 1853-1890"
        );
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("葛飾北斎 神奈川沖浪裏", 5), "葛飾北斎…");
    }

    #[test]
    fn test_render_row_marks_selection() {
        let r = record(27992, "La Grande Jatte");
        assert!(render_row(&r, true).starts_with("[x]"));
        assert!(render_row(&r, false).starts_with("[ ]"));
        assert!(render_row(&r, false).contains("27992"));
    }

    #[test]
    fn test_render_row_missing_years() {
        let line = render_row(&record(1, "Untitled"), false);
        assert!(line.trim_end().ends_with("-      -"));
    }

    #[test]
    fn test_render_page() {
        let records = vec![record(1, "A"), record(2, "B")];
        let selection: SelectionStore = [2].into_iter().collect();
        let table = render_page(&records, &selection);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Title"));
        assert!(lines[2].starts_with("[ ]"));
        assert!(lines[3].starts_with("[x]"));
    }

    #[test]
    fn test_render_page_empty() {
        let table = render_page(&[], &SelectionStore::new());
        assert!(table.contains("作品がありません"));
    }

    #[test]
    fn test_render_status_before_load() {
        let status = render_status(&PaginationController::new(12), &SelectionStore::new());
        assert_eq!(status, "ページ 0/0 (全0件) | 選択中: 0件");
    }

    #[test]
    fn test_render_outcome_partial() {
        let outcome = ExpandOutcome {
            selection: SelectionStore::new(),
            requested: 10,
            collected: 4,
            pages_fetched: 2,
            pages_failed: 1,
        };
        let text = render_outcome(&outcome);
        assert!(text.starts_with("10件中4件を選択 (取得2ページ, 失敗1ページ)"));
        assert!(text.contains("要求件数に届きませんでした"));
    }

    #[test]
    fn test_render_selection() {
        assert_eq!(render_selection(&SelectionStore::new()), "(選択なし)");
        let selection: SelectionStore = [3, 1, 2].into_iter().collect();
        assert_eq!(render_selection(&selection), "1, 2, 3");
    }
}

//! 作品データの型定義
//!
//! ブラウザ(WASM)とCLIで共有される型:
//! - Record: 作品1件（表の1行）
//! - Page: 1ページ分の作品と、データセット全体の件数

use serde::{Deserialize, Serialize};

/// 作品ID（APIのidをそのまま使う。ページをまたいで安定）
pub type RecordId = u64;

/// 文字列項目が欠けている場合の表示値
pub const PLACEHOLDER_TEXT: &str = "N/A";

/// 年項目が欠けている場合の値
pub const PLACEHOLDER_YEAR: i64 = 0;

/// 作品1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    pub place_of_origin: String,
    pub artist_display: String,
    pub inscriptions: String,
    pub date_start: i64,
    pub date_end: i64,
}

impl Record {
    /// IDだけを持つ作品（他の項目はプレースホルダー）
    pub fn placeholder(id: RecordId) -> Self {
        Self {
            id,
            title: PLACEHOLDER_TEXT.to_string(),
            place_of_origin: PLACEHOLDER_TEXT.to_string(),
            artist_display: PLACEHOLDER_TEXT.to_string(),
            inscriptions: PLACEHOLDER_TEXT.to_string(),
            date_start: PLACEHOLDER_YEAR,
            date_end: PLACEHOLDER_YEAR,
        }
    }
}

/// 1ページ分の取得結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// サーバーが返した順の作品
    pub records: Vec<Record>,
    /// 取得時点でのデータセット全体の件数
    pub total_count: u64,
}

impl Page {
    /// ページ内の作品IDをサーバー順で返す
    pub fn ids(&self) -> Vec<RecordId> {
        self.records.iter().map(|r| r.id).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// ページ数 = ceil(total / page_size)
pub fn page_count(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

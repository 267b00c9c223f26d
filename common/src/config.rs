//! ページ取得先の設定
//!
//! ブラウザとCLIの両方で同じURLを組み立てるための設定値

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Art Institute of Chicago 作品API
pub const DEFAULT_ENDPOINT: &str = "https://api.artic.edu/api/v1/artworks";

/// 1ページあたりの件数（APIのデフォルトlimitと同じ）
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// 表に表示する項目
pub const DEFAULT_FIELDS: &[&str] = &[
    "id",
    "title",
    "place_of_origin",
    "artist_display",
    "inscriptions",
    "date_start",
    "date_end",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub endpoint: String,
    pub page_size: u32,
    /// 空ならfieldsパラメータを付けない（全項目を取得）
    pub fields: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            fields: DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl SourceConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// 設定値の検証
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::Config("endpoint が空です".into()));
        }
        if self.page_size == 0 {
            return Err(Error::Config("page_size は1以上にしてください".into()));
        }
        Ok(())
    }

    /// 1始まりのページ番号からリクエストURLを組み立てる
    ///
    /// # Examples
    /// ```
    /// use artworks_common::SourceConfig;
    ///
    /// let config = SourceConfig {
    ///     fields: vec![],
    ///     ..SourceConfig::default()
    /// };
    /// assert_eq!(
    ///     config.page_url(3),
    ///     "https://api.artic.edu/api/v1/artworks?page=3&limit=12"
    /// );
    /// ```
    pub fn page_url(&self, page_number: u32) -> String {
        let endpoint = self.endpoint.trim_end_matches('/');
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        let mut url = format!(
            "{}{}page={}&limit={}",
            endpoint, separator, page_number, self.page_size
        );
        if !self.fields.is_empty() {
            url.push_str("&fields=");
            url.push_str(&self.fields.join(","));
        }
        url
    }
}

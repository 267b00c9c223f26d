//! APIレスポンスパーサー
//!
//! 作品APIの1ページ分のJSONを Page に変換する。
//! 欠けている項目はここでプレースホルダーに正規化する。

use crate::error::{Error, Result};
use crate::types::{Page, Record, RecordId, PLACEHOLDER_TEXT, PLACEHOLDER_YEAR};
use serde::Deserialize;

#[derive(Deserialize)]
struct ApiResponse {
    pagination: ApiPagination,
    data: Vec<ApiArtwork>,
}

#[derive(Deserialize)]
struct ApiPagination {
    total: u64,
}

#[derive(Deserialize)]
struct ApiArtwork {
    id: RecordId,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    place_of_origin: Option<String>,
    #[serde(default)]
    artist_display: Option<String>,
    #[serde(default)]
    inscriptions: Option<String>,
    #[serde(default)]
    date_start: Option<i64>,
    #[serde(default)]
    date_end: Option<i64>,
}

impl From<ApiArtwork> for Record {
    fn from(item: ApiArtwork) -> Self {
        Record {
            id: item.id,
            title: text_or_placeholder(item.title),
            place_of_origin: text_or_placeholder(item.place_of_origin),
            artist_display: text_or_placeholder(item.artist_display),
            inscriptions: text_or_placeholder(item.inscriptions),
            date_start: item.date_start.unwrap_or(PLACEHOLDER_YEAR),
            date_end: item.date_end.unwrap_or(PLACEHOLDER_YEAR),
        }
    }
}

fn text_or_placeholder(value: Option<String>) -> String {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => PLACEHOLDER_TEXT.to_string(),
    }
}

/// ページレスポンスをパース
///
/// # Arguments
/// * `body` - APIレスポンス本文（JSON）
///
/// # Returns
/// * `Ok(Page)` - サーバー順の作品と全体件数
/// * `Err(Error::Json)` - JSONとして読めない
/// * `Err(Error::Parse)` - JSONだが `data` / `pagination.total` の形が違う
pub fn parse_page_response(body: &str) -> Result<Page> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    page_from_value(value)
}

/// パース済みJSONから Page を作る（ブラウザ側で `Response::json()` を使う場合）
pub fn page_from_value(value: serde_json::Value) -> Result<Page> {
    let response: ApiResponse = serde_json::from_value(value)
        .map_err(|e| Error::Parse(format!("想定外のレスポンス形式: {}", e)))?;

    Ok(Page {
        records: response.data.into_iter().map(Record::from).collect(),
        total_count: response.pagination.total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "pagination": {"total": 129884, "limit": 12, "offset": 0, "total_pages": 10824, "current_page": 1},
        "data": [
            {
                "id": 27992,
                "title": "A Sunday on La Grande Jatte — 1884",
                "place_of_origin": "France",
                "artist_display": "Georges Seurat\nFrench, 1859-1891",
                "inscriptions": null,
                "date_start": 1884,
                "date_end": 1886
            },
            {
                "id": 4,
                "title": "",
                "date_start": null
            }
        ]
    }"#;

    #[test]
    fn test_parse_page_response() {
        let page = parse_page_response(SAMPLE).expect("パース失敗");
        assert_eq!(page.total_count, 129884);
        assert_eq!(page.ids(), vec![27992, 4]);

        let first = &page.records[0];
        assert_eq!(first.place_of_origin, "France");
        assert_eq!(first.inscriptions, "N/A");
        assert_eq!(first.date_start, 1884);
        assert_eq!(first.date_end, 1886);
    }

    #[test]
    fn test_missing_fields_are_normalized() {
        let page = parse_page_response(SAMPLE).unwrap();
        let second = &page.records[1];
        assert_eq!(second.title, "N/A");
        assert_eq!(second.place_of_origin, "N/A");
        assert_eq!(second.artist_display, "N/A");
        assert_eq!(second.date_start, 0);
        assert_eq!(second.date_end, 0);
    }

    #[test]
    fn test_empty_data() {
        let page = parse_page_response(r#"{"pagination": {"total": 0}, "data": []}"#).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        let result = parse_page_response("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_pagination_is_parse_error() {
        let result = parse_page_response(r#"{"data": []}"#);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_missing_id_is_parse_error() {
        let result = parse_page_response(r#"{"pagination": {"total": 1}, "data": [{"title": "x"}]}"#);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_page_from_value() {
        let value = serde_json::json!({
            "pagination": {"total": 2},
            "data": [{"id": 1}, {"id": 2, "title": "Untitled"}]
        });
        let page = page_from_value(value).unwrap();
        assert_eq!(page.ids(), vec![1, 2]);
        assert_eq!(page.records[1].title, "Untitled");
    }
}

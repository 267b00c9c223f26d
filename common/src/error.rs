//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// ネットワーク失敗、または成功以外のHTTPステータス
    #[error("Transport error: {0}")]
    Transport(String),

    /// レスポンスの形が想定と異なる
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// 取得失敗として扱うエラーか（ログに残して処理を続行する）
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Parse(_) | Error::Json(_))
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_transport() {
        let error = Error::Transport("connection refused".to_string());
        assert_eq!(format!("{}", error), "Transport error: connection refused");
    }

    #[test]
    fn test_error_display_parse() {
        let error = Error::Parse("pagination.total がありません".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Parse error"));
        assert!(display.contains("pagination.total"));
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("page_size は1以上".to_string());
        assert_eq!(format!("{}", error), "Config error: page_size は1以上");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_is_fetch_failure() {
        assert!(Error::Transport("x".into()).is_fetch_failure());
        assert!(Error::Parse("x".into()).is_fetch_failure());
        assert!(!Error::Config("x".into()).is_fetch_failure());
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ページを取得できませんでした: {0}ページ目")]
    PageUnavailable(u32),

    #[error("ページ番号が範囲外です: {requested} (全{total}ページ)")]
    PageOutOfRange { requested: u32, total: u32 },

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] artworks_common::Error),
}

pub type Result<T> = std::result::Result<T, ViewerError>;

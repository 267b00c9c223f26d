use crate::error::{Result, ViewerError};
use artworks_common::config::{DEFAULT_ENDPOINT, DEFAULT_PAGE_SIZE};
use artworks_common::SourceConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 取得先URLを上書きする環境変数
pub const ENDPOINT_ENV: &str = "ARTWORKS_API_URL";

/// CLI設定（~/.config/artworks-viewer/config.json）
///
/// 設定値のみを保存する。選択状態は保存しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub page_size: u32,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ViewerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("artworks-viewer").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_seconds: 30,
        }
    }

    /// 取得先URL（環境変数を優先）
    pub fn endpoint(&self) -> String {
        self.resolve_endpoint(std::env::var(ENDPOINT_ENV).ok())
    }

    pub fn resolve_endpoint(&self, env_value: Option<String>) -> String {
        match env_value {
            Some(url) if !url.trim().is_empty() => url,
            _ => self.endpoint.clone(),
        }
    }

    /// ページ取得元の設定を組み立てて検証
    pub fn source_config(&self) -> Result<SourceConfig> {
        let source = SourceConfig {
            endpoint: self.endpoint(),
            page_size: self.page_size,
            ..SourceConfig::default()
        };
        source.validate()?;
        Ok(source)
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        if endpoint.trim().is_empty() {
            return Err(ViewerError::Config("endpoint が空です".into()));
        }
        self.endpoint = endpoint;
        Ok(())
    }

    pub fn set_page_size(&mut self, page_size: u32) -> Result<()> {
        if page_size == 0 {
            return Err(ViewerError::Config("page_size は1以上にしてください".into()));
        }
        self.page_size = page_size;
        Ok(())
    }
}

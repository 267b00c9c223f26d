//! reqwestによるページ取得元

use crate::error::Result;
use artworks_common::{parse_page_response, Error, Page, PageSource, SourceConfig};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: reqwest::Client,
    config: SourceConfig,
}

impl HttpPageSource {
    pub fn new(config: SourceConfig, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("artworks-viewer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }
}

impl PageSource for HttpPageSource {
    async fn fetch_page(&self, page_number: u32) -> artworks_common::Result<Page> {
        let url = self.config.page_url(page_number);
        tracing::debug!(%url, "ページ取得");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport(format!("API error: {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        parse_page_response(&body)
    }
}

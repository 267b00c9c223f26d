//! 作品API連携（ブラウザのfetch）

use artworks_common::{parse_page_response, Error, Page, PageSource, Result, SourceConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// fetch APIでページを取得する取得元
#[derive(Debug, Clone, Default)]
pub struct ArticSource {
    config: SourceConfig,
}

impl ArticSource {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }
}

/// JSの例外からメッセージを取り出す
///
/// Errorオブジェクトならmessage、文字列ならそのまま、それ以外はDebug表示
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// GETして本文を文字列で返す
async fn fetch_text(url: &str) -> std::result::Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = gloo::utils::window();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("Empty response"))
}

impl PageSource for ArticSource {
    async fn fetch_page(&self, page_number: u32) -> Result<Page> {
        let url = self.config.page_url(page_number);
        let body = fetch_text(&url)
            .await
            .map_err(|e| Error::Transport(js_error_message(&e)))?;
        parse_page_response(&body)
    }
}

//! Artworks Viewer Common Library
//!
//! ブラウザ(WASM)とCLIで共有される選択・ページ送りのロジック

pub mod types;
pub mod config;
pub mod error;
pub mod parser;
pub mod selection;
pub mod pagination;
pub mod source;
pub mod expander;
pub mod session;

pub use types::{Page, Record, RecordId, PLACEHOLDER_TEXT, PLACEHOLDER_YEAR};
pub use config::SourceConfig;
pub use error::{Error, Result};
pub use parser::{page_from_value, parse_page_response};
pub use selection::SelectionStore;
pub use pagination::{LoadState, PaginationController};
pub use source::{MemoryPageSource, PageSource};
pub use expander::{expand_selection, ExpandOutcome};
pub use session::ViewerSession;

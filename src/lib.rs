//! Artworks Viewer CLI
//!
//! 作品APIをページ単位で表示し、ページをまたいで行を選択する端末向けフロントエンド

pub mod browse;
pub mod bulk;
pub mod cli;
pub mod config;
pub mod error;
pub mod http_source;
pub mod logging;
pub mod render;

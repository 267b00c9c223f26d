//! ログ出力の初期化

use tracing_subscriber::EnvFilter;

/// 既定のログレベル（RUST_LOG が優先）
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "artworks_viewer=debug,artworks_common=debug"
    } else {
        "warn"
    }
}

/// tracing の出力先を標準エラーに設定
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

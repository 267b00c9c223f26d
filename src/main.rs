use artworks_common::{LoadState, ViewerSession};
use artworks_viewer::{browse, bulk, cli, config, error, http_source, logging, render};
use clap::Parser;
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::{Result, ViewerError};
use http_source::HttpPageSource;
use std::time::Duration;

fn open_session(config: &Config) -> Result<ViewerSession<HttpPageSource>> {
    let source = HttpPageSource::new(
        config.source_config()?,
        Duration::from_secs(config.timeout_seconds),
    )?;
    Ok(ViewerSession::new(source, config.page_size))
}

/// 指定ページ（1始まり）を読み込み、範囲内か確認する
async fn load_page(session: &mut ViewerSession<HttpPageSource>, page: u32) -> Result<()> {
    let index = cli::page_index_from_arg(page).map_err(ViewerError::Config)?;
    if session.on_page_change(index).await == LoadState::Failed {
        return Err(ViewerError::PageUnavailable(page));
    }

    let total = session.pagination().total_pages();
    if index > 0 && index >= total {
        return Err(ViewerError::PageOutOfRange { requested: page, total });
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Page { page, format } => {
            let mut session = open_session(&config)?;
            load_page(&mut session, page).await?;

            match format {
                OutputFormat::Table => {
                    println!("{}", render::render_page(session.visible_records(), session.selection()));
                    println!("{}", render::render_status(session.pagination(), session.selection()));
                }
                OutputFormat::Json => {
                    let json = serde_json::json!({
                        "page": page,
                        "totalPages": session.pagination().total_pages(),
                        "totalRecords": session.pagination().total_records(),
                        "records": session.visible_records(),
                    });
                    println!("{}", serde_json::to_string_pretty(&json)?);
                }
            }
        }

        Commands::Select { count, start_page, format } => {
            let mut session = open_session(&config)?;
            if format == OutputFormat::Table {
                println!("🖼  artworks-viewer - 一括選択\n");
                println!("[1/2] {}ページ目を読み込み中...", start_page);
            }
            load_page(&mut session, start_page).await?;

            if format == OutputFormat::Table {
                println!("✔ 全{}ページ / {}件\n", session.pagination().total_pages(), session.pagination().total_records());
                println!("[2/2] {}件を選択中...", count);
            }
            let outcome = bulk::run_bulk_selection(&mut session, count).await;

            match format {
                OutputFormat::Table => {
                    println!("✔ {}\n", render::render_outcome(&outcome));
                    println!("選択ID: {}", render::render_selection(session.selection()));
                }
                OutputFormat::Json => {
                    let selected: Vec<_> = session.selection().iter().collect();
                    let json = serde_json::json!({
                        "requested": outcome.requested,
                        "collected": outcome.collected,
                        "pagesFetched": outcome.pages_fetched,
                        "pagesFailed": outcome.pages_failed,
                        "selectedIds": selected,
                    });
                    println!("{}", serde_json::to_string_pretty(&json)?);
                }
            }
        }

        Commands::Browse { page } => {
            let index = cli::page_index_from_arg(page).map_err(ViewerError::Config)?;
            let mut session = open_session(&config)?;
            println!("🖼  artworks-viewer - ブラウズ ({})", session.source().config().endpoint);
            browse::run_interactive_browse(&mut session, index).await?;
        }

        Commands::Config { set_endpoint, set_page_size, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                changed = true;
                println!("✔ 取得先URLを設定しました");
            }

            if let Some(page_size) = set_page_size {
                config.set_page_size(page_size)?;
                changed = true;
                println!("✔ 1ページあたりの件数を設定しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  取得先URL: {}", config.endpoint());
                println!("  1ページの件数: {}", config.page_size);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

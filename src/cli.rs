use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "artworks-viewer")]
#[command(about = "美術作品APIの表形式ビューア（ページをまたいだ選択・一括選択）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 1ページ分の作品を表示
    Page {
        /// ページ番号（1始まり）
        #[arg(default_value = "1")]
        page: u32,

        /// 出力形式 (table/json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// 指定ページから先頭N件を一括選択し、選択IDを出力
    Select {
        /// 選択する件数
        #[arg(short, long, required = true)]
        count: u64,

        /// 開始ページ（1始まり）
        #[arg(short, long, default_value = "1")]
        start_page: u32,

        /// 出力形式 (table/json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// 対話的にページを移動しながら行を選択
    Browse {
        /// 最初に表示するページ（1始まり）
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// 設定を表示/編集
    Config {
        /// 取得先URLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 1ページあたりの件数を設定
        #[arg(long)]
        set_page_size: Option<u32>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use table or json", s)),
        }
    }
}

/// 1始まりのページ番号を0始まりに変換
pub fn page_index_from_arg(page: u32) -> Result<u32, String> {
    page.checked_sub(1)
        .ok_or_else(|| "ページ番号は1から指定してください".to_string())
}

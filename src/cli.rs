use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(name = "geo-position")]
#[command(about = "経緯度Excelに逆ジオコーディングの地名を付与するツール", long_about = None)]
pub struct Cli {
    /// 省略時は run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 設定ファイル
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub config: PathBuf,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// 入力ブックを処理して出力ブックを生成
    Run {
        /// 入力ブック（設定ファイルの filepath を上書き）
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// 出力ブック（設定ファイルの outputfile を上書き）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

impl Cli {
    /// サブコマンド省略時は上書きなしの run
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run {
            input: None,
            output: None,
        })
    }
}

use clap::Parser;
use geo_position_rust::{cli, config, error, geocoder, logging, pipeline};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use geocoder::BaiduGeocoder;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "処理を中断しました");
            eprintln!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Commands::Run { input, output } => {
            println!("🗺  geo-position - 逆ジオコーディング\n");

            // 1. 設定読み込み
            println!("[1/3] 設定を読み込み中... ({})", cli.config.display());
            let config = Config::load(&cli.config)?.with_overrides(input, output);
            println!("✔ 入力: {}", config.input_path.display());
            println!("✔ 出力: {}\n", config.output_path.display());

            // 2. 逆ジオコーディング
            println!("[2/3] 逆ジオコーディング中...");
            let geocoder = BaiduGeocoder::new(&config)?;
            let progress = pipeline::row_spinner(cli.verbose);

            let result = pipeline::run_pipeline(&config, &geocoder, &progress).await;
            progress.finish_and_clear();
            let summary = result?;

            // 3. 結果
            println!("✔ {}\n", summary);
            println!("[3/3] 保存しました: {}", config.output_path.display());
            println!("\n✅ 完了");
        }

        Commands::Config { show } => {
            let config = Config::load(&cli.config)?;

            if show {
                println!("設定 ({}):", cli.config.display());
                println!("  入力: {}", config.input_path.display());
                println!("  出力: {}", config.output_path.display());
                println!("  APIキー: {}", config.masked_api_key());
                println!("  エンドポイント: {}", config.endpoint);
                println!("  凡例シート: {}", config.legend_sheet);
                println!("  出力シート: {}", config.output_sheet);
                println!(
                    "  座標列: 始点 {}/{} 終点 {}/{}",
                    config.columns.start_lng,
                    config.columns.start_lat,
                    config.columns.end_lng,
                    config.columns.end_lat
                );
                match config.timeout_seconds {
                    Some(secs) => println!("  タイムアウト: {}秒", secs),
                    None => println!("  タイムアウト: 既定"),
                }
            } else {
                println!("✔ 設定ファイルは有効です: {}", cli.config.display());
            }
        }
    }

    Ok(())
}

//! 一括処理（設定 → 入力 → 逆ジオコーディング → 出力）

use crate::config::Config;
use crate::error::Result;
use crate::export;
use crate::geocoder::{resolve, ReverseGeocoder};
use crate::reader::{CoordinateReader, SheetRow};
use geo_position_common::{GeocodeOutcome, OutputRow};
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::time::Duration;

/// 処理件数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sheets_read: usize,
    pub sheets_skipped: usize,
    pub rows_read: usize,
    pub rows_written: usize,
    pub rows_skipped: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "シート {}件（除外 {}件） / 行 {}件: 出力 {}件, スキップ {}件",
            self.sheets_read, self.sheets_skipped, self.rows_read, self.rows_written, self.rows_skipped
        )
    }
}

/// 行処理用のスピナー
///
/// 詳細ログ（-v）では行ごとのログと重なるため表示しない。
pub fn row_spinner(verbose: bool) -> ProgressBar {
    if verbose {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::with_template("{spinner} {pos}行 {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.enable_steady_tick(Duration::from_millis(120));
    progress
}

/// 入力ブック全体を処理して出力ブックを保存する
///
/// 行単位の失敗はログに残してスキップし、処理を続ける。
/// 設定・入出力ブックに関する失敗は即座にエラーを返す。
pub async fn run_pipeline<G: ReverseGeocoder>(
    config: &Config,
    geocoder: &G,
    progress: &ProgressBar,
) -> Result<RunSummary> {
    let reader = CoordinateReader::open(&config.input_path, config.columns, &config.legend_sheet)?;
    tracing::info!(path = %config.input_path.display(), "入力ブックを開きました");

    let mut workbook = export::create_location_workbook(&config.output_sheet)?;
    let mut summary = RunSummary::default();

    let mut rows = reader.rows();
    for item in rows.by_ref() {
        let row = item?;

        if row.is_blank() {
            tracing::debug!(sheet = %row.sheet, row = row.row_index, "空行をスキップ");
            continue;
        }

        summary.rows_read += 1;
        progress.set_message(format!("{} {}行目", row.sheet, row.row_index + 1));

        match process_row(geocoder, &row, progress).await {
            Some(output) => {
                workbook.append_row(&output)?;
                summary.rows_written += 1;
            }
            None => summary.rows_skipped += 1,
        }
        progress.inc(1);
    }
    summary.sheets_read = rows.sheets_read();
    summary.sheets_skipped = rows.sheets_skipped();

    export::save_excel(&mut workbook, &config.output_path)?;
    tracing::info!(path = %config.output_path.display(), rows = summary.rows_written, "出力ブックを保存しました");

    Ok(summary)
}

/// 1行分の始点・終点を解決する（どちらかが失敗したら None）
async fn process_row<G: ReverseGeocoder>(
    geocoder: &G,
    row: &SheetRow,
    progress: &ProgressBar,
) -> Option<OutputRow> {
    if !row.is_complete() {
        progress.suspend(|| {
            tracing::warn!(
                sheet = %row.sheet,
                row = row.row_index,
                start = %row.start,
                end = %row.end,
                "座標が欠けているためスキップ"
            )
        });
        return None;
    }

    // 始点・終点とも取得してから判定する
    let start = resolve(geocoder, &row.start).await;
    let end = resolve(geocoder, &row.end).await;

    let start_position = describe_point(row, "start", start, progress)?;
    let end_position = describe_point(row, "end", end, progress)?;

    Some(OutputRow {
        start: row.start.clone(),
        end: row.end.clone(),
        start_position,
        end_position,
    })
}

/// 失敗時の警告はスピナーを止めてから出す
fn describe_point(
    row: &SheetRow,
    side: &str,
    outcome: Result<GeocodeOutcome>,
    progress: &ProgressBar,
) -> Option<String> {
    match outcome {
        Ok(GeocodeOutcome::Resolved(detail)) => Some(detail.describe()),
        Ok(GeocodeOutcome::Failed { status, reason }) => {
            progress.suspend(|| {
                tracing::warn!(
                    sheet = %row.sheet,
                    row = row.row_index,
                    side,
                    status,
                    %reason,
                    "住所が返されなかったためスキップ"
                )
            });
            None
        }
        Err(e) => {
            progress.suspend(|| {
                tracing::warn!(sheet = %row.sheet, row = row.row_index, side, error = %e, "逆ジオコーディング失敗のためスキップ")
            });
            None
        }
    }
}
